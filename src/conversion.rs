use serde::{Deserialize, Serialize};

/// sign flag of the power factor register
const POWER_FACTOR_SIGN: u16 = 1 << 15;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivePowerScale {
    /// register value as-is
    Direct,
    /// register value / 1000
    #[default]
    Thousandths,
}

/// Board dependent factors applied on top of the fixed register scaling.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionParameters {
    /// extra multiplier for the voltage reading, compensates the voltage divider
    pub voltage_scale: f64,
    pub active_power_scale: ActivePowerScale,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            voltage_scale: 1.0,
            active_power_scale: ActivePowerScale::Thousandths,
        }
    }
}

impl ConversionParameters {
    /// matches [`crate::chip::CalibrationProfile::compact`]
    pub fn compact() -> Self {
        Self {
            voltage_scale: 0.4687873714,
            active_power_scale: ActivePowerScale::Direct,
        }
    }

    /// in volts
    pub fn voltage(&self, raw: u16) -> f64 {
        raw as f64 * self.voltage_scale / 100.0
    }

    /// in watts
    pub fn active_power(&self, raw: u16) -> f64 {
        let value = signed(raw) as f64;
        match self.active_power_scale {
            ActivePowerScale::Direct => value,
            ActivePowerScale::Thousandths => value / 1000.0,
        }
    }
}

/// two's complement, used by the power and phase angle registers
pub fn signed(raw: u16) -> i16 {
    raw as i16
}

/// in amperes
pub fn current(raw: u16) -> f64 {
    raw as f64 / 1000.0
}

/// reactive (var) and apparent (VA) power
pub fn power(raw: u16) -> f64 {
    signed(raw) as f64
}

/// The power factor register is sign-magnitude: bit 15 is the sign of the 15 bit
/// magnitude below it. Not two's complement!
pub fn power_factor(raw: u16) -> f64 {
    let magnitude = (raw & !POWER_FACTOR_SIGN) as f64;
    let value = if raw & POWER_FACTOR_SIGN != 0 {
        -magnitude
    } else {
        magnitude
    };
    value / 1000.0
}

/// in hertz
pub fn frequency(raw: u16) -> f64 {
    raw as f64 / 100.0
}

/// in degrees
pub fn phase_angle(raw: u16) -> f64 {
    signed(raw) as f64
}

/// in Wh
pub fn active_energy(raw: u16) -> f64 {
    raw as f64
}

/// in varh
pub fn reactive_energy(raw: u16) -> f64 {
    raw as f64 * 0.1
}
