// src/common/timing.rs

use core::time::Duration;

// Note: The settle times below are the datasheet *maximum* measurement
// times, not the typical values (16 ms / 120 ms). Waiting the maximum is
// what makes a subsequent read valid on every part; these are hard device
// requirements, not tunable defaults.

// === Measurement Settle Timing (datasheet "Electrical Characteristics") ===

/// Conversion time for the low resolution mode (max 24 ms).
pub const SETTLE_TIME_LOW_RES: Duration = Duration::from_millis(24);
/// Conversion time for both high resolution modes (max 180 ms).
pub const SETTLE_TIME_HIGH_RES: Duration = Duration::from_millis(180);

// === Bus Contract ===

/// Bus clock the driver is specified against (I2C standard mode). Bringing
/// the bus up at this rate, with pull-ups on both lines, is the HAL's job
/// before a driver is constructed.
pub const BUS_CLOCK_HZ: u32 = 100_000;

// === Conversion ===

/// Count-to-lux sensitivity divisor (datasheet p.7: "Measurement accuracy,
/// typ. 1.2"). Fixed for the part; it does not vary by mode.
pub const SENSITIVITY_TYP: f32 = 1.2;
