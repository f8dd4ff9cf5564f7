pub mod spi;

use fugit::{MicrosDurationU32, MillisDurationU32};

// SPI timings from the data sheet: chip select has to settle before the header byte,
// the chip needs a gap between header and data phase and time to latch before release
pub const SELECT_SETTLE: MicrosDurationU32 = MicrosDurationU32::micros(5);
pub const HEADER_GAP: MicrosDurationU32 = MicrosDurationU32::micros(4);
pub const RELEASE_SETTLE: MicrosDurationU32 = MicrosDurationU32::micros(5);

/// the chip does not answer on the bus while it is resetting
pub const SOFT_RESET_SETTLE: MillisDurationU32 = MillisDurationU32::millis(200);
/// pause after the last write of a block before reading it back for the checksum
pub const CHECKSUM_SETTLE: MillisDurationU32 = MillisDurationU32::millis(10);

/// Byte level access to one ATM90E26 on a shared bus.
///
/// Implementations only move bytes and toggle chip select, all framing and timing of
/// register transactions is done by [`crate::chip::Atm90`].
pub trait Atm90Driver {
    type Error;

    /// assert chip select (active low)
    fn select(&mut self) -> Result<(), Self::Error>;

    /// release chip select
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// clock out one byte and return the byte clocked in at the same time
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    fn delay_us(&mut self, us: u32);

    fn delay_ms(&mut self, ms: u32);
}
