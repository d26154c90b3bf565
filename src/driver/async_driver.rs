// src/driver/async_driver.rs

use crate::common::{
    command::Command,
    config::Config,
    error::Bh1750Error,
    types::{Lux, RawSample},
};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

/// Represents a BH1750 device instance for ASYNCHRONOUS operation
/// (requires the "async" feature).
///
/// Same surface and sequencing as [`Bh1750`], with the settle delay awaited
/// instead of blocked on, so the executor can run other work during the
/// conversion.
///
/// [`Bh1750`]: crate::driver::sync_driver::Bh1750
#[derive(Debug)]
pub struct AsyncBh1750<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
}

impl<I2C, D> AsyncBh1750<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a driver from an already-configured bus. Performs no bus
    /// traffic.
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        AsyncBh1750 { i2c, delay, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the owned bus handle and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Wakes the device and clears its data register.
    pub async fn init(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerOn).await?;
        self.send(Command::Reset).await
    }

    /// Measures the current ambient light and returns the illuminance.
    /// Request, await the mode-dependent settle time, read, convert.
    pub async fn illuminance(&mut self) -> Result<Lux, Bh1750Error<I2C::Error>> {
        self.send(Command::OneTimeMeasurement { mode: self.config.mode }).await?;
        self.settle().await;
        let raw = self.read_measurement().await?;
        Ok(raw.to_lux(self.config.mode))
    }

    /// Starts free-running conversions and awaits the first settle interval.
    pub async fn start_continuous(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::ContinuousMeasurement { mode: self.config.mode }).await?;
        self.settle().await;
        Ok(())
    }

    /// Reads the latest completed conversion of a free-running measurement.
    pub async fn read_continuous(&mut self) -> Result<Lux, Bh1750Error<I2C::Error>> {
        let raw = self.read_measurement().await?;
        Ok(raw.to_lux(self.config.mode))
    }

    /// Puts the device into its lowest-power state.
    pub async fn power_down(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerDown).await
    }

    /// Wakes the device from power-down.
    pub async fn power_on(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerOn).await
    }

    /// Clears the data register. The device only accepts this while
    /// powered on.
    pub async fn reset(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::Reset).await
    }

    // --- Low-Level Transaction Helpers (Private) ---

    async fn send(&mut self, command: Command) -> Result<(), Bh1750Error<I2C::Error>> {
        self.i2c.write(self.config.addr.as_u8(), &[command.opcode()]).await?;
        Ok(())
    }

    async fn settle(&mut self) {
        let settle = self.config.mode.settle_time();
        self.delay.delay_us(settle.as_micros() as u32).await;
    }

    async fn read_measurement(&mut self) -> Result<RawSample, Bh1750Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c.read(self.config.addr.as_u8(), &mut buf).await?;
        Ok(RawSample::from_be_bytes(buf))
    }
}
