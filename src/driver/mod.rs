// src/driver/mod.rs

// Declare the driver implementations. The blocking driver is always
// available; the async twin rides behind the "async" feature.

pub mod sync_driver;

#[cfg(feature = "async")]
pub mod async_driver;

// --- Public Re-exports ---

pub use sync_driver::Bh1750;

#[cfg(feature = "async")]
pub use async_driver::AsyncBh1750;
