//! Raw samples and their conversion to illuminance.

use super::mode::Mode;
use super::timing::SENSITIVITY_TYP;
use core::fmt;

// --- Raw 16-bit sample ---

/// One raw conversion result as read from the device's data register.
///
/// The device shifts the register out MSB first; construction from wire
/// bytes is therefore explicitly big-endian.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RawSample(u16);

impl RawSample {
    /// Creates a sample from an already-assembled counter value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Assembles a sample from the two bytes as they appear on the bus.
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Converts the raw counter into illuminance. Pure arithmetic, no I/O.
    ///
    /// In `HighRes2` the device packs a half-lux fractional bit into the
    /// low bit of the word (datasheet p.12); the other modes are a plain
    /// scale (datasheet p.7).
    pub fn to_lux(self, mode: Mode) -> Lux {
        let raw = self.0;
        let lux = match mode {
            Mode::HighRes2 => (0.5 * (raw & 1) as f32 + (raw >> 1) as f32) / SENSITIVITY_TYP,
            Mode::HighRes1 | Mode::LowRes => raw as f32 / SENSITIVITY_TYP,
        };
        Lux(lux)
    }
}

impl From<RawSample> for u16 {
    fn from(value: RawSample) -> Self {
        value.0
    }
}

// --- Illuminance value ---

/// An illuminance reading in lux, the result of one measurement cycle.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Lux(pub(crate) f32);

impl Lux {
    /// Returns the value as f32.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.0
    }
}

impl From<Lux> for f32 {
    fn from(value: Lux) -> Self {
        value.0
    }
}

impl fmt::Display for Lux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} lx", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_be_bytes() {
        assert_eq!(RawSample::from_be_bytes([0x01, 0x2C]).value(), 300);
        assert_eq!(RawSample::from_be_bytes([0x00, 0x00]).value(), 0);
        assert_eq!(RawSample::from_be_bytes([0xFF, 0xFF]).value(), 65535);
    }

    #[test]
    fn test_zero_converts_to_zero_in_every_mode() {
        let raw = RawSample::new(0);
        assert_eq!(raw.to_lux(Mode::HighRes1).as_f32(), 0.0);
        assert_eq!(raw.to_lux(Mode::HighRes2).as_f32(), 0.0);
        assert_eq!(raw.to_lux(Mode::LowRes).as_f32(), 0.0);
    }

    #[test]
    fn test_plain_scale_modes() {
        // HighRes1 and LowRes are raw / 1.2, bit for bit.
        for raw in [1u16, 2, 299, 300, 1000, 32768, 65534, 65535] {
            let expected = raw as f32 / 1.2;
            assert_eq!(RawSample::new(raw).to_lux(Mode::HighRes1).as_f32(), expected);
            assert_eq!(RawSample::new(raw).to_lux(Mode::LowRes).as_f32(), expected);
        }
    }

    #[test]
    fn test_high_res2_reconstructs_half_lux_bit() {
        for raw in [0u16, 1, 2, 3, 300, 301, 4095, 65534, 65535] {
            let expected = (0.5 * (raw & 1) as f32 + (raw >> 1) as f32) / 1.2;
            assert_eq!(RawSample::new(raw).to_lux(Mode::HighRes2).as_f32(), expected);
        }
    }

    #[test]
    fn test_known_values() {
        // 300 counts in HighRes1: 300 / 1.2 = 250 lx.
        let lux = RawSample::new(300).to_lux(Mode::HighRes1).as_f32();
        assert!((lux - 250.0).abs() < 1e-3);

        // Same counter in HighRes2: low bit 0, 150 / 1.2 = 125 lx.
        let lux = RawSample::new(300).to_lux(Mode::HighRes2).as_f32();
        assert!((lux - 125.0).abs() < 1e-3);

        // Full scale in HighRes1: 65535 / 1.2 = 54612.5 lx.
        let lux = RawSample::new(65535).to_lux(Mode::HighRes1).as_f32();
        assert!((lux - 54612.5).abs() < 0.5);
    }

    #[test]
    fn test_raw_sample_into_u16() {
        assert_eq!(u16::from(RawSample::new(300)), 300);
    }
}
