//! Interpretation of a completed 40-bit frame.

/// A decoded DHT11 frame.
///
/// The sensor transmits five bytes, most significant first: humidity
/// integer, humidity fraction, temperature integer, temperature fraction,
/// checksum. The checksum is the wrapping 8-bit sum of the four data bytes.
/// A frame with a failed checksum is still reported, flagged by `valid`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Integer part of the relative humidity, in percent.
    pub humidity_high: u8,
    /// Fractional part of the relative humidity, in tenths of a percent.
    pub humidity_low: u8,
    /// Integer part of the temperature, in degrees Celsius.
    pub temperature_high: u8,
    /// Fractional part of the temperature, in tenths of a degree.
    pub temperature_low: u8,
    /// Checksum byte as transmitted.
    pub checksum: u8,
    /// Whether `checksum` matches the wrapping sum of the data bytes.
    pub valid: bool,
}

impl Frame {
    /// Splits a 40-bit accumulator into the five byte fields and checks the
    /// checksum.
    pub fn from_accumulator(accumulator: u64) -> Self {
        let checksum = accumulator as u8;
        let temperature_low = (accumulator >> 8) as u8;
        let temperature_high = (accumulator >> 16) as u8;
        let humidity_low = (accumulator >> 24) as u8;
        let humidity_high = (accumulator >> 32) as u8;

        let sum = [humidity_high, humidity_low, temperature_high, temperature_low]
            .iter()
            .fold(0u8, |sum, v| sum.wrapping_add(*v));

        Frame {
            humidity_high,
            humidity_low,
            temperature_high,
            temperature_low,
            checksum,
            valid: checksum == sum,
        }
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> f32 {
        f32::from(self.humidity_high) + f32::from(self.humidity_low) / 10.0
    }

    /// Temperature in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        f32::from(self.temperature_high) + f32::from(self.temperature_low) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds the accumulator the way the decoder does: MSB first.
    fn accumulate(bytes: [u8; 5]) -> u64 {
        bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
    }

    #[test]
    fn test_field_split() {
        let frame = Frame::from_accumulator(accumulate([0x46, 0x00, 0x17, 0x08, 0x65]));

        assert_eq!(
            frame,
            Frame {
                humidity_high: 0x46,
                humidity_low: 0x00,
                temperature_high: 0x17,
                temperature_low: 0x08,
                checksum: 0x65,
                valid: true,
            }
        );
    }

    #[test]
    fn test_checksum_is_modular_sum() {
        // 0x46 + 0x00 + 0x17 + 0x08 = 0x65; only that byte validates.
        for checksum in 0..=255u8 {
            let frame = Frame::from_accumulator(accumulate([0x46, 0x00, 0x17, 0x08, checksum]));
            assert_eq!(frame.valid, checksum == 0x65);
        }
    }

    #[test]
    fn test_checksum_wraps() {
        // 0xF0 + 0x20 + 0x10 + 0x05 = 0x125, truncated to 0x25.
        let frame = Frame::from_accumulator(accumulate([0xF0, 0x20, 0x10, 0x05, 0x25]));
        assert!(frame.valid);
    }

    #[test]
    fn test_float_accessors() {
        let frame = Frame::from_accumulator(accumulate([70, 3, 23, 8, 104]));

        assert!(frame.valid);
        assert_eq!(frame.humidity(), 70.3);
        assert_eq!(frame.temperature(), 23.8);
    }
}
