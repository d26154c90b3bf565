// src/lib.rs

//! Platform-agnostic driver for the ROHM BH1750 ambient light sensor,
//! built on the [`embedded-hal`](https://crates.io/crates/embedded-hal)
//! `I2c` and `DelayNs` traits. Enable the `async` feature for an
//! `embedded-hal-async` based driver with the same surface.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::Bh1750Error;
pub use common::Config;
pub use common::DeviceAddr;
pub use common::Mode;
pub use driver::Bh1750;

#[cfg(feature = "async")]
pub use driver::AsyncBh1750;
