use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_3};
use fugit::HertzU32;

use super::Atm90Driver;

/// clock idles high, data is sampled on the trailing edge
pub const SPI_MODE: Mode = MODE_3;
/// the chip tops out well below typical SPI clocks, stay conservative
pub const SPI_FREQUENCY: HertzU32 = HertzU32::kHz(100);

#[derive(Debug, PartialEq, Eq)]
pub enum Atm90SpiError {
    Spi,
    Pin,
}

pub struct Atm90SpiDriver<SPI: SpiBus, CS: OutputPin, D: DelayNs> {
    pub spi_device: SPI,
    pub pin_cs: CS,
    pub delay: D,
}

impl<SPI: SpiBus, CS: OutputPin, D: DelayNs> Atm90SpiDriver<SPI, CS, D> {
    /// takes ownership of the bus and releases chip select
    pub fn new(spi_device: SPI, mut pin_cs: CS, delay: D) -> Result<Self, Atm90SpiError> {
        pin_cs.set_high().map_err(|_| Atm90SpiError::Pin)?;
        Ok(Self {
            spi_device,
            pin_cs,
            delay,
        })
    }

    pub fn release(self) -> (SPI, CS, D) {
        (self.spi_device, self.pin_cs, self.delay)
    }
}

impl<SPI: SpiBus, CS: OutputPin, D: DelayNs> Atm90Driver for Atm90SpiDriver<SPI, CS, D> {
    type Error = Atm90SpiError;

    fn select(&mut self) -> Result<(), Atm90SpiError> {
        self.pin_cs.set_low().map_err(|_| Atm90SpiError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Atm90SpiError> {
        // make sure the last byte has left the shift register before releasing the chip,
        // chip select goes high even if the bus failed
        let flushed = self.spi_device.flush();
        self.pin_cs.set_high().map_err(|_| Atm90SpiError::Pin)?;
        flushed.map_err(|_| Atm90SpiError::Spi)
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Atm90SpiError> {
        let mut buf = [byte];
        if let Err(_) = self.spi_device.transfer_in_place(&mut buf) {
            return Err(Atm90SpiError::Spi);
        }
        Ok(buf[0])
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
