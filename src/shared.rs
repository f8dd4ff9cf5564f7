use core::cell::RefCell;

use embassy_sync::blocking_mutex::{
    raw::{CriticalSectionRawMutex, RawMutex},
    Mutex,
};

use crate::chip::Atm90;
use crate::driver::Atm90Driver;

/// One chip shared between several execution contexts. Only one register transaction
/// can be on the bus at a time, so every access goes through [`SharedAtm90::lock`].
///
/// Calibration holds the lock for the whole sequence, including the reset delay. Pick a
/// raw mutex that does not block interrupts for that long if this matters.
pub struct SharedAtm90<D: Atm90Driver, M: RawMutex = CriticalSectionRawMutex> {
    chip: Mutex<M, RefCell<Atm90<D>>>,
}

impl<D: Atm90Driver, M: RawMutex> SharedAtm90<D, M> {
    pub const fn new(chip: Atm90<D>) -> Self {
        Self {
            chip: Mutex::new(RefCell::new(chip)),
        }
    }

    /// Run `f` with exclusive access to the chip. Must not be called from within `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Atm90<D>) -> R) -> R {
        self.chip.lock(|chip| f(&mut chip.borrow_mut()))
    }

    pub fn into_inner(self) -> Atm90<D> {
        self.chip.into_inner().into_inner()
    }
}
