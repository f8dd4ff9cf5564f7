//! embedded-hal backed bus driver

use std::cell::RefCell;
use std::rc::Rc;

use atm90e26::driver::spi::{Atm90SpiDriver, Atm90SpiError, SPI_FREQUENCY, SPI_MODE};
use atm90e26::{Atm90, Error, Reg};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, Polarity, SpiBus};

#[derive(Debug, Clone, PartialEq)]
enum Wire {
    CsLow,
    CsHigh,
    Byte(u8),
    Flush,
    DelayNs(u32),
}

type Log = Rc<RefCell<Vec<Wire>>>;

#[derive(Debug)]
struct FakeError;

impl spi::Error for FakeError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl digital::Error for FakeError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// answers every byte with the next byte from `miso`
struct FakeSpi {
    log: Log,
    miso: Vec<u8>,
    broken: bool,
    flush_broken: bool,
}

impl spi::ErrorType for FakeSpi {
    type Error = FakeError;
}

impl SpiBus for FakeSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), FakeError> {
        for word in words {
            *word = self.next();
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), FakeError> {
        self.log.borrow_mut().extend(words.iter().map(|w| Wire::Byte(*w)));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), FakeError> {
        self.write(write)?;
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), FakeError> {
        if self.broken {
            return Err(FakeError);
        }
        for word in words {
            self.log.borrow_mut().push(Wire::Byte(*word));
            *word = self.next();
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Wire::Flush);
        if self.flush_broken {
            return Err(FakeError);
        }
        Ok(())
    }
}

impl FakeSpi {
    fn next(&mut self) -> u8 {
        if self.miso.is_empty() {
            0
        } else {
            self.miso.remove(0)
        }
    }
}

struct FakePin {
    log: Log,
}

impl digital::ErrorType for FakePin {
    type Error = FakeError;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Wire::CsLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), FakeError> {
        self.log.borrow_mut().push(Wire::CsHigh);
        Ok(())
    }
}

struct FakeDelay {
    log: Log,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Wire::DelayNs(ns));
    }
}

type FakeChip = Atm90<Atm90SpiDriver<FakeSpi, FakePin, FakeDelay>>;

fn create(miso: &[u8], broken: bool) -> (FakeChip, Log) {
    create_with(miso, broken, false)
}

fn create_with(miso: &[u8], broken: bool, flush_broken: bool) -> (FakeChip, Log) {
    let log: Log = Default::default();
    let driver = Atm90SpiDriver::new(
        FakeSpi {
            log: log.clone(),
            miso: miso.to_vec(),
            broken,
            flush_broken,
        },
        FakePin { log: log.clone() },
        FakeDelay { log: log.clone() },
    )
    .unwrap();
    (Atm90::new(driver), log)
}

#[test]
fn bus_parameters() {
    assert_eq!(SPI_MODE.polarity, Polarity::IdleHigh);
    assert_eq!(SPI_FREQUENCY.to_Hz(), 100_000);
}

#[test]
fn new_releases_chip_select() {
    let (_chip, log) = create(&[], false);
    assert_eq!(*log.borrow(), vec![Wire::CsHigh]);
}

#[test]
fn read_on_the_wire() {
    let (mut chip, log) = create(&[0x00, 0x13, 0x88], false);
    log.borrow_mut().clear();

    assert_eq!(chip.read_register(Reg::Freq), Ok(0x1388));

    let wire = log.borrow();
    assert_eq!(wire[0], Wire::CsLow);
    assert!(matches!(wire[1], Wire::DelayNs(ns) if ns >= 5_000));
    assert_eq!(wire[2], Wire::Byte(0xCC));
    assert!(matches!(wire[3], Wire::DelayNs(ns) if ns >= 4_000));
    assert_eq!(wire[4], Wire::Byte(0x00));
    assert_eq!(wire[5], Wire::Byte(0x00));
    assert!(matches!(wire[6], Wire::DelayNs(ns) if ns >= 5_000));
    assert_eq!(wire[7], Wire::Flush);
    assert_eq!(wire[8], Wire::CsHigh);
    assert_eq!(wire.len(), 9);
}

#[test]
fn write_on_the_wire() {
    let (mut chip, log) = create(&[], false);
    log.borrow_mut().clear();

    chip.write_register(Reg::CalStart, 0x5678).unwrap();

    let bytes: Vec<u8> = log
        .borrow()
        .iter()
        .filter_map(|w| match w {
            Wire::Byte(b) => Some(*b),
            _ => None,
        })
        .collect();
    assert_eq!(bytes, vec![0x20, 0x56, 0x78]);
}

#[test]
fn spi_failure_is_a_bus_error() {
    let (mut chip, log) = create(&[], true);

    assert_eq!(
        chip.read_register(Reg::Urms),
        Err(Error::Bus(Atm90SpiError::Spi))
    );
    // chip select is released anyway
    assert_eq!(log.borrow().last(), Some(&Wire::CsHigh));
}

#[test]
fn failed_flush_still_releases_chip_select() {
    let (mut chip, log) = create_with(&[], true, true);
    log.borrow_mut().clear();

    assert_eq!(
        chip.read_register(Reg::Urms),
        Err(Error::Bus(Atm90SpiError::Spi))
    );

    let wire = log.borrow();
    assert_eq!(wire[0], Wire::CsLow);
    assert_eq!(wire.last(), Some(&Wire::CsHigh));
    assert_eq!(wire.iter().filter(|w| **w == Wire::CsHigh).count(), 1);
}

#[test]
fn flush_error_after_good_frame_is_reported() {
    let (mut chip, log) = create_with(&[0x00, 0x12, 0x34], false, true);
    log.borrow_mut().clear();

    assert_eq!(
        chip.write_register(Reg::Lgain, 0x1234),
        Err(Error::Bus(Atm90SpiError::Spi))
    );
    assert_eq!(log.borrow().last(), Some(&Wire::CsHigh));
}
