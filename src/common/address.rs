// src/common/address.rs

use super::error::Bh1750Error;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of a BH1750 device.
///
/// The part exposes exactly two addresses, selected by the level of its
/// ADDR pin at power-up.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddr(u8);

impl DeviceAddr {
    /// Address with the ADDR pin tied low (datasheet default).
    pub const ADDR_PIN_LOW: DeviceAddr = DeviceAddr(0x23);
    /// Address with the ADDR pin tied high.
    pub const ADDR_PIN_HIGH: DeviceAddr = DeviceAddr(0x5C);

    /// Creates a new `DeviceAddr` if the given value is a valid 7-bit
    /// address. Returns `Result<Self, Bh1750Error<()>>` because validation
    /// itself cannot cause a bus error.
    pub fn new(addr: u8) -> Result<Self, Bh1750Error<()>> {
        if addr <= 0x7F {
            Ok(DeviceAddr(addr))
        } else {
            Err(Bh1750Error::InvalidAddress(addr))
        }
    }

    /// Creates an address without validating the 7-bit range.
    ///
    /// # Safety
    /// The caller must guarantee `addr <= 0x7F`; the drivers put the value
    /// on the bus unchecked.
    pub const unsafe fn new_unchecked(addr: u8) -> Self {
        DeviceAddr(addr)
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// True for the two addresses the part can actually answer on.
    #[inline]
    pub const fn is_bh1750_assigned(&self) -> bool {
        matches!(self.0, 0x23 | 0x5C)
    }
}

impl Default for DeviceAddr {
    fn default() -> Self {
        Self::ADDR_PIN_LOW
    }
}

impl TryFrom<u8> for DeviceAddr {
    type Error = Bh1750Error<()>;

    /// Attempts to convert a raw byte into a `DeviceAddr`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddr> for u8 {
    fn from(value: DeviceAddr) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_addresses() {
        assert_eq!(DeviceAddr::ADDR_PIN_LOW.as_u8(), 0x23);
        assert_eq!(DeviceAddr::ADDR_PIN_HIGH.as_u8(), 0x5C);
        assert!(DeviceAddr::ADDR_PIN_LOW.is_bh1750_assigned());
        assert!(DeviceAddr::ADDR_PIN_HIGH.is_bh1750_assigned());
    }

    #[test]
    fn test_valid_addresses() {
        assert!(DeviceAddr::new(0x00).is_ok());
        assert!(DeviceAddr::new(0x23).is_ok());
        assert!(DeviceAddr::new(0x7F).is_ok());
        // In range, but not an address the part answers on.
        assert!(!DeviceAddr::new(0x42).unwrap().is_bh1750_assigned());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(DeviceAddr::new(0x80), Err(Bh1750Error::InvalidAddress(0x80))));
        assert!(matches!(DeviceAddr::new(0xFF), Err(Bh1750Error::InvalidAddress(0xFF))));
    }

    #[test]
    fn test_default_address() {
        assert_eq!(DeviceAddr::default(), DeviceAddr::ADDR_PIN_LOW);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(DeviceAddr::try_from(0x5C).unwrap(), DeviceAddr::ADDR_PIN_HIGH);
        assert!(matches!(DeviceAddr::try_from(0x90), Err(Bh1750Error::InvalidAddress(0x90))));
    }

    #[test]
    fn test_into_u8() {
        let addr = DeviceAddr::ADDR_PIN_HIGH;
        assert_eq!(u8::from(addr), 0x5C);
    }
}
