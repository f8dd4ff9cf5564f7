//! Driver for the ATM90E26 single-phase energy metering chip.
//!
//! The chip is reached through an [`driver::Atm90Driver`], usually the `embedded-hal`
//! based [`driver::spi::Atm90SpiDriver`]. On top of that [`chip::Atm90`] frames register
//! transactions, [`chip::Sequencer`] brings the chip from reset to a locked calibration
//! and the accessors in [`sample`] turn measurement registers into engineering units.
//!
//! ```ignore
//! let driver = Atm90SpiDriver::new(spi, cs, delay)?;
//! let mut chip = Atm90::with_conversion(driver, config.conversion);
//! let status = Sequencer::new(&config.profile).run(&mut chip)?;
//! if let Some(fault) = status.calibration_fault() {
//!     // profile does not match what the chip latched
//! }
//! let voltage = chip.voltage()?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod chip;
pub mod config;
pub mod conversion;
pub mod driver;
pub mod sample;
pub mod shared;

pub use chip::{Atm90, CalibrationProfile, CalibrationState, Error, Reg, Sequencer};
pub use config::MeterConfig;
pub use conversion::{ActivePowerScale, ConversionParameters};
pub use shared::SharedAtm90;
