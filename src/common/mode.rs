// src/common/mode.rs

use super::error::Bh1750Error;
use super::timing;
use core::convert::TryFrom;
use core::fmt;
use core::time::Duration;

/// Resolution mode of the BH1750.
///
/// The discriminants are the mode bits exactly as the device consumes them
/// in the low bits of a measurement opcode (datasheet "Instruction Set
/// Architecture" table). Trading precision for conversion time:
/// higher resolution requires the longer settle time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// High resolution, 1 lx per count.
    HighRes1 = 0x00,
    /// High resolution mode 2, 0.5 lx per count. The half-lux bit is packed
    /// into the low bit of the raw word (datasheet p.12).
    HighRes2 = 0x01,
    /// Low resolution, 4 lx per count, but the fastest conversion.
    LowRes = 0x03,
}

impl Mode {
    /// Mode bits to be OR'd into a measurement opcode.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Creates a `Mode` from raw mode bits, rejecting the values the device
    /// does not define. Returns `Result<Self, Bh1750Error<()>>` because
    /// validation itself cannot cause a bus error.
    pub fn from_bits(bits: u8) -> Result<Self, Bh1750Error<()>> {
        match bits {
            0x00 => Ok(Mode::HighRes1),
            0x01 => Ok(Mode::HighRes2),
            0x03 => Ok(Mode::LowRes),
            other => Err(Bh1750Error::InvalidMode(other)),
        }
    }

    /// Mandatory wait between issuing a measurement command and the result
    /// becoming valid. Reading earlier yields a stale or garbage sample.
    pub const fn settle_time(self) -> Duration {
        match self {
            Mode::LowRes => timing::SETTLE_TIME_LOW_RES,
            Mode::HighRes1 | Mode::HighRes2 => timing::SETTLE_TIME_HIGH_RES,
        }
    }

    /// Nominal illuminance step per count in this mode.
    pub const fn resolution_lux(self) -> f32 {
        match self {
            Mode::HighRes1 => 1.0,
            Mode::HighRes2 => 0.5,
            Mode::LowRes => 4.0,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::HighRes1
    }
}

impl TryFrom<u8> for Mode {
    type Error = Bh1750Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::HighRes1 => write!(f, "high resolution (1 lx)"),
            Mode::HighRes2 => write!(f, "high resolution 2 (0.5 lx)"),
            Mode::LowRes => write!(f, "low resolution (4 lx)"),
        }
    }
}
