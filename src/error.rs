/// Possible errors from the DHT11 driver.
///
/// Protocol-level problems are not represented here: bad pulse timing and
/// watchdog timeouts are absorbed by the decoder resetting to idle, and a
/// failed checksum still yields a [`Frame`](crate::Frame) with
/// `valid = false`. Only host GPIO failures surface.
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The GPIO session could not be established.
    Init(E),
    /// Error from the GPIO pin after the session was up.
    Pin(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}
