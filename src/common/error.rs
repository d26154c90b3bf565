// src/common/error.rs

/// Errors produced by the BH1750 driver.
///
/// `E` is the error type of the underlying bus implementation; operations
/// that cannot touch the bus use `Bh1750Error<()>`.
#[derive(Debug, thiserror::Error)]
pub enum Bh1750Error<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Bus error
{
    /// Underlying I2C bus error from the HAL implementation.
    #[error("I2C bus error: {0:?}")] // Format string requires Debug on E
    Bus(E),

    /// Raw mode bits do not name one of the three defined resolution modes.
    #[error("Invalid resolution mode bits: {0:#04x}")]
    InvalidMode(u8),

    /// Device address is outside the 7-bit range.
    #[error("Invalid device address: {0:#04x}")]
    InvalidAddress(u8),
}

// Allow mapping from the underlying HAL error so `?` works on bus calls.
impl<E: core::fmt::Debug> From<E> for Bh1750Error<E> {
    fn from(e: E) -> Self {
        Bh1750Error::Bus(e)
    }
}

// Note: For the Bus(E) variant's #[error("...")] message to work correctly
// even in no_std, the underlying error type `E` must implement
// `core::fmt::Debug`. embedded-hal's i2c::ErrorType already requires this.
