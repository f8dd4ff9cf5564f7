//! Power-on calibration of the chip as an explicit state machine.
//!
//! Every call to [`Sequencer::step`] performs the register writes of exactly one
//! transition. A bus error aborts the sequence and sends it back to
//! [`CalibrationState::Reset`], the chip's unlock latches do not survive a partial run.

use log::{debug, info, warn};

use super::{
    Atm90, CalibrationProfile, Error, Reg, SystemStatus, COMMIT_CODE, SOFT_RESET_CODE,
    UNLOCK_CODE,
};
use crate::driver::{Atm90Driver, CHECKSUM_SETTLE, SOFT_RESET_SETTLE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalibrationState {
    Reset,
    Configuring,
    CalibratingBlock1,
    ChecksumBlock1Written,
    ConfiguringBlock2,
    CalibratingBlock2,
    ChecksumBlock2Written,
    Locked,
}

pub struct Sequencer<'p> {
    profile: &'p CalibrationProfile,
    state: CalibrationState,
    aborted_in: Option<CalibrationState>,
}

impl<'p> Sequencer<'p> {
    pub fn new(profile: &'p CalibrationProfile) -> Self {
        Self {
            profile,
            state: CalibrationState::Reset,
            aborted_in: None,
        }
    }

    pub fn state(&self) -> CalibrationState {
        self.state
    }

    /// state in which the last run was aborted by a bus error
    pub fn aborted_in(&self) -> Option<CalibrationState> {
        self.aborted_in
    }

    /// start over, the next step soft resets the chip
    pub fn restart(&mut self) {
        self.state = CalibrationState::Reset;
    }

    /// Perform one transition and return the new state. Stepping a locked sequencer
    /// does nothing.
    pub fn step<D: Atm90Driver>(
        &mut self,
        chip: &mut Atm90<D>,
    ) -> Result<CalibrationState, Error<D::Error>> {
        match self.transition(chip) {
            Ok(next) => {
                debug!("calibration {:?} -> {:?}", self.state, next);
                self.state = next;
                self.aborted_in = None;
                Ok(next)
            }
            Err(e) => {
                warn!("calibration aborted in {:?}, restarting from reset", self.state);
                self.aborted_in = Some(self.state);
                self.state = CalibrationState::Reset;
                Err(e)
            }
        }
    }

    fn transition<D: Atm90Driver>(
        &self,
        chip: &mut Atm90<D>,
    ) -> Result<CalibrationState, Error<D::Error>> {
        use CalibrationState::*;

        let profile = self.profile;
        let next = match self.state {
            Reset => {
                chip.write_register(Reg::SoftReset, SOFT_RESET_CODE)?;
                chip.driver.delay_ms(SOFT_RESET_SETTLE.ticks());
                Configuring
            }
            Configuring => {
                chip.write_register(Reg::FuncEn, profile.function_enable)?;
                chip.write_register(Reg::SagTh, profile.sag_threshold)?;
                CalibratingBlock1
            }
            CalibratingBlock1 => {
                chip.write_register(Reg::CalStart, UNLOCK_CODE)?;
                for (reg, value) in profile.calibration.writes() {
                    chip.write_register(reg, value)?;
                }
                chip.driver.delay_ms(CHECKSUM_SETTLE.ticks());
                let cs1 = chip.compute_cs1()?;
                self.check_expected("CS1", cs1, profile.checksums().cs1);
                chip.write_register(Reg::CSOne, cs1)?;
                ChecksumBlock1Written
            }
            ChecksumBlock1Written => {
                chip.write_register(Reg::AdjStart, UNLOCK_CODE)?;
                ConfiguringBlock2
            }
            ConfiguringBlock2 => {
                for (reg, value) in profile.adjustment.writes() {
                    chip.write_register(reg, value)?;
                }
                CalibratingBlock2
            }
            CalibratingBlock2 => {
                chip.driver.delay_ms(CHECKSUM_SETTLE.ticks());
                let cs2 = chip.compute_cs2()?;
                self.check_expected("CS2", cs2, profile.checksums().cs2);
                chip.write_register(Reg::CSTwo, cs2)?;
                ChecksumBlock2Written
            }
            ChecksumBlock2Written => {
                chip.write_register(Reg::CalStart, COMMIT_CODE)?;
                chip.write_register(Reg::AdjStart, COMMIT_CODE)?;
                Locked
            }
            Locked => Locked,
        };
        Ok(next)
    }

    fn check_expected(&self, name: &str, read_back: u16, expected: u16) {
        if read_back == expected {
            debug!("{name} = {read_back:#06x}");
        } else {
            // the chip latched something else than the profile says, it will flag this
            warn!("{name} = {read_back:#06x}, profile expects {expected:#06x}");
        }
    }

    /// Step from the current state until the chip is locked.
    pub fn run_to_lock<D: Atm90Driver>(
        &mut self,
        chip: &mut Atm90<D>,
    ) -> Result<(), Error<D::Error>> {
        while self.step(chip)? != CalibrationState::Locked {}
        info!("calibration locked");
        Ok(())
    }

    /// Run the whole sequence from reset and read back the system status. A checksum
    /// fault reported by the chip is part of the returned status, not an error.
    pub fn run<D: Atm90Driver>(
        &mut self,
        chip: &mut Atm90<D>,
    ) -> Result<SystemStatus, Error<D::Error>> {
        self.restart();
        self.run_to_lock(chip)?;
        let status = chip.system_status()?;
        if let Some(fault) = status.calibration_fault() {
            warn!("chip reports calibration fault {fault:?}");
        }
        Ok(status)
    }
}
