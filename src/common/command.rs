//! BH1750 command definitions.
//!
//! See the datasheet "Instruction Set Architecture" table. Every command is
//! a single opcode byte written to the device; the two measurement commands
//! carry the resolution mode in their low bits.

use super::mode::Mode;
use core::fmt;

/// Base opcode for continuous measurement commands.
const CONTINUOUS_BASE: u8 = 0x10;
/// Base opcode for one-time (single-shot) measurement commands.
const ONE_TIME_BASE: u8 = 0x20;

/// Represents a BH1750 command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Power Down (`0x00`) - No active state, lowest current draw.
    PowerDown,

    /// Power On (`0x01`) - Waiting for a measurement command.
    PowerOn,

    /// Reset (`0x07`) - Clears the data register. Only accepted while the
    /// device is powered on.
    Reset,

    /// Continuously Measure (`0x10..=0x13`) - Starts free-running
    /// conversions in the given resolution mode; the data register always
    /// holds the latest completed conversion.
    ContinuousMeasurement { mode: Mode },

    /// One Time Measurement (`0x20..=0x23`) - Starts a single conversion in
    /// the given resolution mode; the device powers itself down afterwards.
    OneTimeMeasurement { mode: Mode },
}

impl Command {
    /// The opcode byte as written on the bus.
    pub const fn opcode(&self) -> u8 {
        match self {
            Command::PowerDown => 0x00,
            Command::PowerOn => 0x01,
            Command::Reset => 0x07,
            Command::ContinuousMeasurement { mode } => CONTINUOUS_BASE | mode.bits(),
            Command::OneTimeMeasurement { mode } => ONE_TIME_BASE | mode.bits(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PowerDown => write!(f, "power down"),
            Command::PowerOn => write!(f, "power on"),
            Command::Reset => write!(f, "reset"),
            Command::ContinuousMeasurement { mode } => {
                write!(f, "continuous measurement, {}", mode)
            }
            Command::OneTimeMeasurement { mode } => {
                write!(f, "one-time measurement, {}", mode)
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_opcodes() {
        assert_eq!(Command::PowerDown.opcode(), 0x00);
        assert_eq!(Command::PowerOn.opcode(), 0x01);
        assert_eq!(Command::Reset.opcode(), 0x07);
    }

    #[test]
    fn test_one_time_opcodes() {
        // One-shot base opcode OR'd with the mode bits.
        assert_eq!(Command::OneTimeMeasurement { mode: Mode::HighRes1 }.opcode(), 0x20);
        assert_eq!(Command::OneTimeMeasurement { mode: Mode::HighRes2 }.opcode(), 0x21);
        assert_eq!(Command::OneTimeMeasurement { mode: Mode::LowRes }.opcode(), 0x23);
    }

    #[test]
    fn test_continuous_opcodes() {
        assert_eq!(Command::ContinuousMeasurement { mode: Mode::HighRes1 }.opcode(), 0x10);
        assert_eq!(Command::ContinuousMeasurement { mode: Mode::HighRes2 }.opcode(), 0x11);
        assert_eq!(Command::ContinuousMeasurement { mode: Mode::LowRes }.opcode(), 0x13);
    }
}
