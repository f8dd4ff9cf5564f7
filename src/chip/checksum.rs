//! Checksums the chip verifies over its two calibration blocks.
//!
//! Each checksum is a fold over the bytes of every register in the block: the low byte
//! is the 8 bit wrapping sum, the high byte the XOR of all bytes.

use super::{Atm90, Error, Reg};
use crate::driver::Atm90Driver;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecksumPair {
    /// over [`Reg::CALIBRATION_BLOCK`], written to [`Reg::CSOne`]
    pub cs1: u16,
    /// over [`Reg::ADJUSTMENT_BLOCK`], written to [`Reg::CSTwo`]
    pub cs2: u16,
}

pub fn fold(values: impl IntoIterator<Item = u16>) -> u16 {
    let mut sum = 0u8;
    let mut xor = 0u8;
    for value in values {
        let [high, low] = value.to_be_bytes();
        sum = sum.wrapping_add(high).wrapping_add(low);
        xor ^= high ^ low;
    }
    u16::from_be_bytes([xor, sum])
}

impl<D: Atm90Driver> Atm90<D> {
    fn checksum_block(&mut self, block: &[Reg]) -> Result<u16, Error<D::Error>> {
        let mut values = [0u16; 11];
        for (value, reg) in values.iter_mut().zip(block) {
            *value = self.read_register(*reg)?;
        }
        Ok(fold(values[..block.len()].iter().copied()))
    }

    /// reads back the calibration block and folds it into CS1
    pub fn compute_cs1(&mut self) -> Result<u16, Error<D::Error>> {
        self.checksum_block(&Reg::CALIBRATION_BLOCK)
    }

    /// reads back the adjustment block and folds it into CS2
    pub fn compute_cs2(&mut self) -> Result<u16, Error<D::Error>> {
        self.checksum_block(&Reg::ADJUSTMENT_BLOCK)
    }
}
