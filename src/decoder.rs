//! Pulse-timing state machine reconstructing the 40-bit frame.
//!
//! The host GPIO layer timestamps every edge on the data line and hands the
//! `(level, tick)` pairs to [`PulseDecoder::feed`], one at a time, from its
//! own notification context. The decoder classifies the length of the pulse
//! each edge terminates and accumulates bits until a full frame is present.
//! Anything that does not fit the expected pattern drops the in-progress
//! frame and returns the machine to idle, ready for the next preamble.

use crate::frame::Frame;
use crate::host::Level;

// Observed timestamps jitter heavily: the nominally 80 us preamble halves
// show up anywhere between 70 and 95 ticks. The bands are therefore wide
// numeric ranges that do not overlap within a level, not exact datasheet
// widths.

/// Preamble half band, exclusive on both ends (nominally 80 us).
const PREAMBLE_MIN: u32 = 70;
const PREAMBLE_MAX: u32 = 95;

/// Inter-bit low gap (nominally 50 us).
const GAP_MIN: u32 = 35;
const GAP_MAX: u32 = 65;

/// High pulse of a zero bit (nominally 26 us).
const ZERO_MIN: u32 = 15;
const ZERO_MAX: u32 = 35;

/// High pulse of a one bit (nominally 70 us).
const ONE_MIN: u32 = 60;
const ONE_MAX: u32 = 80;

/// Bits in a complete frame.
const FRAME_BITS: u8 = 40;

/// Decoder phase.
///
/// The machine is cyclic: every frame completion and every decode failure
/// re-enters [`Phase::Idle`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing recognized yet; waiting for the low half of a preamble.
    Idle,
    /// The 80 us low half was seen; the 80 us high half must follow.
    PreambleStarted,
    /// Preamble complete; accumulating bit pulses.
    ReadingBits,
}

/// State machine turning edge notifications into decoded frames.
///
/// The host must call [`feed`](Self::feed) with events in arrival order and
/// never concurrently; `&mut self` makes the single-writer requirement a
/// compile-time fact for safe callers. No synchronization with the context
/// issuing conversion triggers is needed because that context never touches
/// this state.
pub struct PulseDecoder {
    phase: Phase,
    last_tick: u32,
    accumulator: u64,
    bit_count: u8,
}

impl PulseDecoder {
    /// Creates an idle decoder.
    pub const fn new() -> Self {
        PulseDecoder {
            phase: Phase::Idle,
            last_tick: 0,
            accumulator: 0,
            bit_count: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bits accumulated since the last completed preamble. Never exceeds 40.
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    /// Consumes one edge notification and returns a frame if this event
    /// completed one.
    ///
    /// `level` is the level the line transitioned to, so the measured pulse
    /// is the one that just ended: a [`Level::High`] event measures a low
    /// pulse and vice versa. `tick` is the host's wrapping microsecond
    /// counter; the delta is taken with wrapping arithmetic and a counter
    /// wraparound mid-frame is not corrected, it reads as an arbitrary
    /// length and at worst costs that one frame.
    ///
    /// A [`Level::WatchdogTimeout`] event matches no band and therefore
    /// resets the machine to idle, so a dropped transmission cannot wedge
    /// the decoder.
    pub fn feed(&mut self, level: Level, tick: u32) -> Option<Frame> {
        let len = tick.wrapping_sub(self.last_tick);
        self.last_tick = tick;

        let mut emitted = None;
        self.phase = match self.phase {
            Phase::Idle => {
                // A low pulse of preamble length could be the start of one.
                if level == Level::High && len > PREAMBLE_MIN && len < PREAMBLE_MAX {
                    Phase::PreambleStarted
                } else {
                    Phase::Idle
                }
            }
            Phase::PreambleStarted => {
                // The high half completes the preamble and opens a fresh
                // frame. Anything else, back to idle.
                if level == Level::Low && len > PREAMBLE_MIN && len < PREAMBLE_MAX {
                    self.accumulator = 0;
                    self.bit_count = 0;
                    Phase::ReadingBits
                } else {
                    Phase::Idle
                }
            }
            Phase::ReadingBits => {
                if level == Level::High && (GAP_MIN..=GAP_MAX).contains(&len) {
                    // The low gap before each bit's high pulse; no bit yet.
                    Phase::ReadingBits
                } else if level == Level::Low && (ZERO_MIN..=ZERO_MAX).contains(&len) {
                    self.accumulator <<= 1;
                    self.bit_count += 1;
                    self.check_complete(&mut emitted)
                } else if level == Level::Low && (ONE_MIN..=ONE_MAX).contains(&len) {
                    self.accumulator = (self.accumulator << 1) | 1;
                    self.bit_count += 1;
                    self.check_complete(&mut emitted)
                } else {
                    // Out-of-band timing or a watchdog timeout: abandon the
                    // frame.
                    Phase::Idle
                }
            }
        };

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "pulse {} len={=u32} phase={} bits={=u8}",
            level,
            len,
            self.phase,
            self.bit_count
        );

        #[cfg(feature = "defmt")]
        if let Some(frame) = &emitted {
            if frame.valid {
                defmt::info!(
                    "{=u8}.{=u8} %RH, {=u8}.{=u8} C",
                    frame.humidity_high,
                    frame.humidity_low,
                    frame.temperature_high,
                    frame.temperature_low
                );
            } else {
                defmt::warn!(
                    "checksum mismatch: {=u8}.{=u8} %RH, {=u8}.{=u8} C",
                    frame.humidity_high,
                    frame.humidity_low,
                    frame.temperature_high,
                    frame.temperature_low
                );
            }
        }

        emitted
    }

    /// Emits the accumulated frame if the 40th bit was just recorded.
    /// Emission and the return to idle happen in the same step.
    fn check_complete(&mut self, emitted: &mut Option<Frame>) -> Phase {
        if self.bit_count == FRAME_BITS {
            *emitted = Some(Frame::from_accumulator(self.accumulator));
            Phase::Idle
        } else {
            Phase::ReadingBits
        }
    }
}

impl Default for PulseDecoder {
    fn default() -> Self {
        Self::new()
    }
}
