mod registers;
pub use registers::Reg;

pub mod checksum;
pub use checksum::ChecksumPair;

mod status;
pub use status::{CalibrationFault, SystemStatus};

mod configuration;
pub use configuration::*;

pub mod sequencer;
pub use sequencer::{CalibrationState, Sequencer};

use crate::conversion::ConversionParameters;
use crate::driver::{Atm90Driver, HEADER_GAP, RELEASE_SETTLE, SELECT_SETTLE};

/// set in the header byte for reads, cleared for writes
const HEADER_READ: u8 = 0x80;
const HEADER_ADDR_MASK: u8 = 0x7F;

/// written to [`Reg::SoftReset`] to reset the chip
pub const SOFT_RESET_CODE: u16 = 0x789A;
/// written to [`Reg::CalStart`] / [`Reg::AdjStart`] to open a block for writing
pub const UNLOCK_CODE: u16 = 0x5678;
/// written to [`Reg::CalStart`] / [`Reg::AdjStart`] to commit a block, the chip checks
/// the block checksum at this point
pub const COMMIT_CODE: u16 = 0x8765;

#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// the transport failed to exchange a byte
    Bus(E),
    /// address is not in the register map or is read only and was written to
    InvalidAddress(u8),
}

pub struct Atm90<D: Atm90Driver> {
    pub driver: D,
    pub conversion: ConversionParameters,
}

impl<D: Atm90Driver> Atm90<D> {
    pub fn new(driver: D) -> Self {
        Self::with_conversion(driver, Default::default())
    }

    pub fn with_conversion(driver: D, conversion: ConversionParameters) -> Self {
        Self { driver, conversion }
    }

    /// hand back the bus, e.g. to share it with another device
    pub fn release(self) -> D {
        self.driver
    }

    /// one three byte transaction: header, then the data word MSB first
    fn transaction(&mut self, header: u8, data: u16) -> Result<u16, D::Error> {
        let [msb, lsb] = data.to_be_bytes();

        self.driver.select()?;
        self.driver.delay_us(SELECT_SETTLE.ticks());

        let result = self.frame(header, msb, lsb);

        // release chip select even if the exchange failed, the chip discards partial frames
        self.driver.delay_us(RELEASE_SETTLE.ticks());
        let released = self.driver.deselect();

        let value = result?;
        released?;
        Ok(value)
    }

    fn frame(&mut self, header: u8, msb: u8, lsb: u8) -> Result<u16, D::Error> {
        self.driver.exchange(header)?;
        self.driver.delay_us(HEADER_GAP.ticks());
        let msb_in = self.driver.exchange(msb)?;
        let lsb_in = self.driver.exchange(lsb)?;
        Ok(u16::from_be_bytes([msb_in, lsb_in]))
    }

    pub fn read_register(&mut self, reg: Reg) -> Result<u16, Error<D::Error>> {
        let header = HEADER_READ | (reg.addr() & HEADER_ADDR_MASK);
        self.transaction(header, 0x0000).map_err(Error::Bus)
    }

    /// The chip does not acknowledge writes, use [`Self::last_data`] to see what it latched.
    ///
    /// Writes to the calibration (0x21..=0x2B) or adjustment (0x31..=0x3A) blocks are not
    /// checked against the lock state. Once a [`Sequencer`] has locked the chip, changing
    /// these registers invalidates CS1 / CS2, re-run the sequencer from reset instead.
    pub fn write_register(&mut self, reg: Reg, value: u16) -> Result<(), Error<D::Error>> {
        if !reg.is_writable() {
            return Err(Error::InvalidAddress(reg.addr()));
        }
        let header = reg.addr() & HEADER_ADDR_MASK;
        self.transaction(header, value).map_err(Error::Bus)?;
        Ok(())
    }

    /// read by raw address, the address has to be part of the register map
    pub fn read_address(&mut self, addr: u8) -> Result<u16, Error<D::Error>> {
        let reg = Reg::from_addr(addr).ok_or(Error::InvalidAddress(addr))?;
        self.read_register(reg)
    }

    /// write by raw address, rejected before any bus activity if the address is unknown
    /// or read only. Same caveat for calibration registers as [`Self::write_register`].
    pub fn write_address(&mut self, addr: u8, value: u16) -> Result<(), Error<D::Error>> {
        let reg = Reg::from_addr(addr).ok_or(Error::InvalidAddress(addr))?;
        self.write_register(reg, value)
    }

    pub fn system_status(&mut self) -> Result<SystemStatus, Error<D::Error>> {
        self.read_register(Reg::SysStatus).map(SystemStatus::from)
    }

    /// raw metering status (EnStatus)
    pub fn metering_status(&mut self) -> Result<u16, Error<D::Error>> {
        self.read_register(Reg::EnStatus)
    }

    /// data word of the previous SPI transaction as seen by the chip
    pub fn last_data(&mut self) -> Result<u16, Error<D::Error>> {
        self.read_register(Reg::LastData)
    }
}
