//! DHT11 Edge-Event Decoder for Embedded Rust
//!
//! This crate reads the DHT11 humidity/temperature sensor's single-wire
//! protocol from a stream of timestamped edge notifications, rather than by
//! busy-waiting on the pin. The host GPIO layer (pigpio-style: direction and
//! pull control, a per-pin watchdog, and edge callbacks carrying a wrapping
//! microsecond tick) sits behind the [`HostPin`] trait.
//!
//! Two independent execution contexts are involved:
//! - [`Dht11`] issues conversion triggers on a schedule: hold the line low
//!   for 19 ms, release, return immediately, no waiting for a result;
//! - the host's notification context feeds each `(level, tick)` edge event
//!   into [`PulseDecoder::feed`], which reconstructs the 40-bit frame and
//!   hands out a [`Frame`] with its checksum verdict.
//!
//! The two sides are never synchronized and never wait for each other;
//! frames surface only through the decoder's return value (and, with the
//! `defmt` feature, its logging).
//!
//! # Features
//! - Pure, host-independent pulse decoder with wide timing bands tolerant
//!   of jittery timestamping
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`, including a per-edge trace
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`DelayNs`] for the trigger hold and inter-attempt pauses
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for the public types and enables
//!   per-edge and per-frame logging from the decoder
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod decoder;
pub mod dht11;
pub mod error;
pub mod frame;
pub mod host;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use decoder::{Phase, PulseDecoder};
pub use dht11::{DEFAULT_ATTEMPTS, Dht11};
pub use error::DhtError;
pub use frame::Frame;
pub use host::{HostPin, Level};
pub use session::{Session, WATCHDOG_MS};
