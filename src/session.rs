//! Lifetime of the pin configuration around a measurement run.

use crate::error::DhtError;
use crate::host::HostPin;

/// Watchdog window in milliseconds. Caps silent stretches so a stalled or
/// absent transmission still produces an event for the decoder.
pub const WATCHDOG_MS: u16 = 50;

/// An established GPIO session for the sensor pin.
///
/// On open the pin is an input with the pull-up enabled, the output register
/// is latched low (so any later switch to output mode pulls the line down,
/// see [`Dht11::trigger`](crate::Dht11::trigger)), and the watchdog is
/// armed. Closing releases the pull resistor; it runs at most once no
/// matter how often it is called, and `Drop` runs it best-effort.
///
/// Termination paths that skip destructors (abort, fatal signals) leave the
/// pull resistor enabled. Known limitation.
pub struct Session<P: HostPin> {
    pin: P,
    closed: bool,
}

impl<P: HostPin> Session<P> {
    /// Configures the pin and arms the watchdog.
    ///
    /// Any failure here is fatal to the caller and reported as
    /// [`DhtError::Init`]; nothing is rolled back because the session never
    /// came up.
    pub fn open(mut pin: P) -> Result<Self, DhtError<P::Error>> {
        pin.set_input_pullup().map_err(DhtError::Init)?;
        pin.write_low().map_err(DhtError::Init)?;
        pin.arm_watchdog(WATCHDOG_MS).map_err(DhtError::Init)?;
        Ok(Session { pin, closed: false })
    }

    /// Releases the pull resistor. Idempotent: marked closed before the
    /// release, so a failed release is not retried from `Drop`.
    pub fn close(&mut self) -> Result<(), DhtError<P::Error>> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.pin.release_pull()?;
        Ok(())
    }

    pub(crate) fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<P: HostPin> Drop for Session<P> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPin, Op};

    #[test]
    fn test_open_configures_pin() {
        let (pin, log) = MockPin::new();
        let _session = Session::open(pin).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![Op::InputPullup, Op::WriteLow, Op::ArmWatchdog(WATCHDOG_MS)]
        );
    }

    #[test]
    fn test_open_failure_is_init() {
        let (pin, _log) = MockPin::failing_on(Op::ArmWatchdog(WATCHDOG_MS));
        let err = Session::open(pin).err().unwrap();
        assert_eq!(err, DhtError::Init(crate::mock::MockError));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (pin, log) = MockPin::new();
        let mut session = Session::open(pin).unwrap();

        session.close().unwrap();
        session.close().unwrap();
        drop(session);

        let releases = log.borrow().iter().filter(|op| **op == Op::ReleasePull).count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn test_drop_releases_pull() {
        let (pin, log) = MockPin::new();
        {
            let _session = Session::open(pin).unwrap();
        }
        assert_eq!(log.borrow().last(), Some(&Op::ReleasePull));
    }
}
