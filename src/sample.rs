use serde::Serialize;

use crate::chip::{Atm90, Error, Reg};
use crate::conversion;
use crate::driver::Atm90Driver;

/// Instantaneous quantities, one register read each.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Sample {
    pub voltage: f64,
    pub current: f64,
    pub neutral_current: f64,
    pub active_power: f64,
    pub reactive_power: f64,
    pub apparent_power: f64,
    pub power_factor: f64,
    pub frequency: f64,
    pub phase_angle: f64,
}

/// Energy accumulated since the previous read of each register.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct EnergySample {
    pub forward_active: f64,
    pub reverse_active: f64,
    pub absolute_active: f64,
    pub forward_reactive: f64,
    pub reverse_reactive: f64,
    pub absolute_reactive: f64,
}

impl<D: Atm90Driver> Atm90<D> {
    /// L-N voltage in volts
    pub fn voltage(&mut self) -> Result<f64, Error<D::Error>> {
        let raw = self.read_register(Reg::Urms)?;
        Ok(self.conversion.voltage(raw))
    }

    /// L line current in amperes
    pub fn current(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::Irms).map(conversion::current)
    }

    /// N line current in amperes
    pub fn neutral_current(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::IrmsN).map(conversion::current)
    }

    pub fn active_power(&mut self) -> Result<f64, Error<D::Error>> {
        let raw = self.read_register(Reg::Pmean)?;
        Ok(self.conversion.active_power(raw))
    }

    pub fn reactive_power(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::Qmean).map(conversion::power)
    }

    pub fn apparent_power(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::Smean).map(conversion::power)
    }

    pub fn power_factor(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::PowerF).map(conversion::power_factor)
    }

    pub fn frequency(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::Freq).map(conversion::frequency)
    }

    pub fn phase_angle(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::Pangle).map(conversion::phase_angle)
    }

    // energy registers are cleared by the chip when read

    pub fn forward_active_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::APenergy).map(conversion::active_energy)
    }

    pub fn reverse_active_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::ANenergy).map(conversion::active_energy)
    }

    pub fn absolute_active_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::ATenergy).map(conversion::active_energy)
    }

    pub fn forward_reactive_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::RPenergy).map(conversion::reactive_energy)
    }

    pub fn reverse_reactive_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::RNenergy).map(conversion::reactive_energy)
    }

    pub fn absolute_reactive_energy(&mut self) -> Result<f64, Error<D::Error>> {
        self.read_register(Reg::RTenergy).map(conversion::reactive_energy)
    }

    pub fn read_sample(&mut self) -> Result<Sample, Error<D::Error>> {
        Ok(Sample {
            voltage: self.voltage()?,
            current: self.current()?,
            neutral_current: self.neutral_current()?,
            active_power: self.active_power()?,
            reactive_power: self.reactive_power()?,
            apparent_power: self.apparent_power()?,
            power_factor: self.power_factor()?,
            frequency: self.frequency()?,
            phase_angle: self.phase_angle()?,
        })
    }

    pub fn read_energy(&mut self) -> Result<EnergySample, Error<D::Error>> {
        Ok(EnergySample {
            forward_active: self.forward_active_energy()?,
            reverse_active: self.reverse_active_energy()?,
            absolute_active: self.absolute_active_energy()?,
            forward_reactive: self.forward_reactive_energy()?,
            reverse_reactive: self.reverse_reactive_energy()?,
            absolute_reactive: self.absolute_reactive_energy()?,
        })
    }
}
