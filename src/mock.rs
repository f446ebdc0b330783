//! Recording mock for the [`HostPin`] trait, used by the session and
//! driver tests. `embedded-hal-mock` covers the delay side; the pull and
//! watchdog operations have no embedded-hal counterpart, so pin calls are
//! recorded here and checked against expectations.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::HostPin;

/// One recorded pin operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    InputPullup,
    Output,
    WriteLow,
    ReleasePull,
    ArmWatchdog(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockError;

/// Records every operation into a log shareable across an owning `Session`,
/// so tests can inspect calls made from `Drop`. Optionally fails a chosen
/// operation.
pub struct MockPin {
    log: Rc<RefCell<Vec<Op>>>,
    fail_on: Option<Op>,
}

impl MockPin {
    pub fn new() -> (Self, Rc<RefCell<Vec<Op>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            MockPin {
                log: log.clone(),
                fail_on: None,
            },
            log,
        )
    }

    pub fn failing_on(op: Op) -> (Self, Rc<RefCell<Vec<Op>>>) {
        let (mut pin, log) = Self::new();
        pin.fail_on = Some(op);
        (pin, log)
    }

    fn record(&mut self, op: Op) -> Result<(), MockError> {
        if self.fail_on == Some(op) {
            return Err(MockError);
        }
        self.log.borrow_mut().push(op);
        Ok(())
    }
}

impl HostPin for MockPin {
    type Error = MockError;

    fn set_input_pullup(&mut self) -> Result<(), Self::Error> {
        self.record(Op::InputPullup)
    }

    fn set_output(&mut self) -> Result<(), Self::Error> {
        self.record(Op::Output)
    }

    fn write_low(&mut self) -> Result<(), Self::Error> {
        self.record(Op::WriteLow)
    }

    fn release_pull(&mut self) -> Result<(), Self::Error> {
        self.record(Op::ReleasePull)
    }

    fn arm_watchdog(&mut self, ms: u16) -> Result<(), Self::Error> {
        self.record(Op::ArmWatchdog(ms))
    }
}
