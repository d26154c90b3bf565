// src/driver/sync_driver.rs

use crate::common::{
    command::Command,
    config::Config,
    error::Bh1750Error,
    types::{Lux, RawSample},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Represents a BH1750 device instance for SYNCHRONOUS (blocking) operation.
///
/// The driver owns its bus handle and delay provider; concurrent use of the
/// same device requires external serialization, exactly as for any other
/// exclusive `I2c` owner.
#[derive(Debug)]
pub struct Bh1750<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
}

impl<I2C, D> Bh1750<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a driver from an already-configured bus.
    ///
    /// Bus bringup (pins, pull-ups, [`timing::BUS_CLOCK_HZ`]) happens in the
    /// HAL before this point; construction performs no bus traffic.
    ///
    /// [`timing::BUS_CLOCK_HZ`]: crate::common::timing::BUS_CLOCK_HZ
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Bh1750 { i2c, delay, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the owned bus handle and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // --- Public Blocking Methods ---

    /// Wakes the device and clears its data register, leaving it in the
    /// power-on idle state ready for a measurement command.
    pub fn init(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerOn)?;
        self.send(Command::Reset)
    }

    /// Measures the current ambient light and returns the illuminance.
    ///
    /// One full cycle: request a single conversion, block for the
    /// mode-dependent settle time (24 ms low resolution, 180 ms high
    /// resolution), read the result and convert it. The device powers
    /// itself down after the conversion.
    pub fn illuminance(&mut self) -> Result<Lux, Bh1750Error<I2C::Error>> {
        self.request_measurement()?;
        self.settle();
        let raw = self.read_measurement()?;
        Ok(raw.to_lux(self.config.mode))
    }

    /// Starts free-running conversions in the configured resolution mode.
    ///
    /// Blocks for one settle interval so the first [`read_continuous`]
    /// already sees a completed conversion.
    ///
    /// [`read_continuous`]: Self::read_continuous
    pub fn start_continuous(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::ContinuousMeasurement { mode: self.config.mode })?;
        self.settle();
        Ok(())
    }

    /// Reads the latest completed conversion of a free-running measurement
    /// without triggering a new one. Only meaningful after
    /// [`start_continuous`](Self::start_continuous).
    pub fn read_continuous(&mut self) -> Result<Lux, Bh1750Error<I2C::Error>> {
        let raw = self.read_measurement()?;
        Ok(raw.to_lux(self.config.mode))
    }

    /// Puts the device into its lowest-power state.
    pub fn power_down(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerDown)
    }

    /// Wakes the device from power-down.
    pub fn power_on(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::PowerOn)
    }

    /// Clears the data register. The device only accepts this while
    /// powered on.
    pub fn reset(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::Reset)
    }

    // --- Low-Level Transaction Helpers (Private) ---

    /// Writes a single command byte, addressed with the write-direction bit.
    fn send(&mut self, command: Command) -> Result<(), Bh1750Error<I2C::Error>> {
        self.i2c.write(self.config.addr.as_u8(), &[command.opcode()])?;
        Ok(())
    }

    fn request_measurement(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.send(Command::OneTimeMeasurement { mode: self.config.mode })
    }

    /// Blocks until the conversion started by the last measurement command
    /// is valid.
    fn settle(&mut self) {
        let settle = self.config.mode.settle_time();
        self.delay.delay_us(settle.as_micros() as u32);
    }

    /// Reads exactly the two result bytes, MSB first. The transport NACKs
    /// the final byte and stops the transaction, per the `I2c` contract.
    fn read_measurement(&mut self) -> Result<RawSample, Bh1750Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c.read(self.config.addr.as_u8(), &mut buf)?;
        Ok(RawSample::from_be_bytes(buf))
    }
}
