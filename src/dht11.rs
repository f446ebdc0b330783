//! Conversion triggering and the fixed read loop.

use embedded_hal::delay::DelayNs;

use crate::error::DhtError;
use crate::host::HostPin;
use crate::session::Session;

/// Hold time for the start pulse. The datasheet asks for at least 18 ms
/// low; scheduling pressure may stretch the hold well past this, which the
/// sensor tolerates.
const START_PULSE_MS: u32 = 19;

/// Pause between read attempts in [`Dht11::run`].
const ATTEMPT_GAP_MS: u32 = 100;

/// Read attempts a full [`Dht11::run`] cycle performs.
pub const DEFAULT_ATTEMPTS: u32 = 50;

/// Driver for the DHT11 over an established [`Session`].
///
/// This side only ever touches pin direction; the resulting edge stream is
/// decoded elsewhere (see
/// [`PulseDecoder::feed`](crate::PulseDecoder::feed)), in the host's
/// notification context, with no synchronization between the two.
pub struct Dht11<P: HostPin, D> {
    session: Session<P>,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: HostPin,
    D: DelayNs,
{
    /// Creates the driver over an open session and a delay provider.
    pub fn new(session: Session<P>, delay: D) -> Self {
        Dht11 { session, delay }
    }

    /// Starts one sensor conversion.
    ///
    /// Switching to output mode pulls the line low (the output register is
    /// latched low at session open); after the hold the pin goes back to
    /// input so the sensor can drive its response.
    ///
    /// Fire-and-forget: this returns as soon as the line is released. The
    /// decoder may be mid-frame or idle at that point, and whether this
    /// particular conversion ever produces a frame is not observable here.
    pub fn trigger(&mut self) -> Result<(), DhtError<P::Error>> {
        self.session.pin_mut().set_output()?;
        self.delay.delay_ms(START_PULSE_MS);
        self.session.pin_mut().set_input_pullup()?;
        Ok(())
    }

    /// Triggers `attempts` conversions with a fixed pause between them.
    ///
    /// No result collection, no adaptive retry: decoded frames surface
    /// independently through the decoder's reporting path.
    pub fn run(&mut self, attempts: u32) -> Result<(), DhtError<P::Error>> {
        for _ in 0..attempts {
            self.trigger()?;
            self.delay.delay_ms(ATTEMPT_GAP_MS);
        }
        Ok(())
    }

    /// Closes the underlying session. See [`Session::close`].
    pub fn close(&mut self) -> Result<(), DhtError<P::Error>> {
        self.session.close()
    }
}
