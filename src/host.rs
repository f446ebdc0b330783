//! Host GPIO collaborator interface.
//!
//! `embedded-hal` has no trait for reconfiguring a pin between input and
//! output, controlling pull resistors, or arming a per-pin watchdog, so the
//! host environment provides these through [`HostPin`].

/// Line level reported with an edge notification.
///
/// The host reports the level the line has just transitioned *to*, so a
/// [`Level::High`] event marks the end of a low pulse and a [`Level::Low`]
/// event marks the end of a high pulse. [`Level::WatchdogTimeout`] is a
/// synthetic event the host delivers when no edge occurred within the armed
/// watchdog window.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
    WatchdogTimeout,
}

/// Capabilities of the host GPIO layer consumed by this driver.
///
/// Beyond these pin operations, the host must deliver edge notifications as
/// `(level, tick)` pairs to a single handler, one at a time, in arrival
/// order. That handler feeds them to
/// [`PulseDecoder::feed`](crate::PulseDecoder::feed); single-handler
/// delivery is what makes the decoder's unsynchronized state safe and is a
/// hard precondition on any implementation of this trait.
pub trait HostPin {
    /// Error produced by the underlying GPIO operations.
    type Error;

    /// Configures the pin as input with the pull-up enabled.
    fn set_input_pullup(&mut self) -> Result<(), Self::Error>;

    /// Configures the pin as output, driving whatever level is latched in
    /// the output register.
    fn set_output(&mut self) -> Result<(), Self::Error>;

    /// Latches a low level into the output register without changing the
    /// pin direction.
    fn write_low(&mut self) -> Result<(), Self::Error>;

    /// Releases the pull resistor.
    fn release_pull(&mut self) -> Result<(), Self::Error>;

    /// Arms a watchdog that synthesizes a [`Level::WatchdogTimeout`] event
    /// if no edge occurs on the pin for `ms` milliseconds.
    fn arm_watchdog(&mut self, ms: u16) -> Result<(), Self::Error>;
}
