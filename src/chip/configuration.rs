use serde::{Deserialize, Serialize};

use super::checksum::{fold, ChecksumPair};
use super::Reg;

/// Constants of one installation, written once by the [`super::Sequencer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// FuncEn, operational mode flags
    pub function_enable: u16,
    /// SagTh, voltage sag threshold
    pub sag_threshold: u16,
    pub calibration: CalibrationBlock,
    pub adjustment: AdjustmentBlock,
}

/// registers 0x21..=0x2B, covered by CS1
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationBlock {
    pub meter_constant_high: u16,
    pub meter_constant_low: u16,
    pub line_gain: u16,
    pub line_phase: u16,
    pub neutral_gain: u16,
    pub neutral_phase: u16,
    pub active_start_threshold: u16,
    pub active_no_load_threshold: u16,
    pub reactive_start_threshold: u16,
    pub reactive_no_load_threshold: u16,
    pub metering_mode: u16,
}

/// registers 0x31..=0x3A, covered by CS2
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentBlock {
    pub voltage_gain: u16,
    pub line_current_gain: u16,
    pub neutral_current_gain: u16,
    pub voltage_offset: u16,
    pub line_current_offset: u16,
    pub neutral_current_offset: u16,
    pub line_active_offset: u16,
    pub line_reactive_offset: u16,
    pub neutral_active_offset: u16,
    pub neutral_reactive_offset: u16,
}

impl CalibrationBlock {
    /// register values in address order
    pub fn writes(&self) -> [(Reg, u16); 11] {
        [
            (Reg::PLconstH, self.meter_constant_high),
            (Reg::PLconstL, self.meter_constant_low),
            (Reg::Lgain, self.line_gain),
            (Reg::Lphi, self.line_phase),
            (Reg::Ngain, self.neutral_gain),
            (Reg::Nphi, self.neutral_phase),
            (Reg::PStartTh, self.active_start_threshold),
            (Reg::PNolTh, self.active_no_load_threshold),
            (Reg::QStartTh, self.reactive_start_threshold),
            (Reg::QNolTh, self.reactive_no_load_threshold),
            (Reg::MMode, self.metering_mode),
        ]
    }
}

impl AdjustmentBlock {
    /// register values in address order
    pub fn writes(&self) -> [(Reg, u16); 10] {
        [
            (Reg::Ugain, self.voltage_gain),
            (Reg::IgainL, self.line_current_gain),
            (Reg::IgainN, self.neutral_current_gain),
            (Reg::Uoffset, self.voltage_offset),
            (Reg::IoffsetL, self.line_current_offset),
            (Reg::IoffsetN, self.neutral_current_offset),
            (Reg::PoffsetL, self.line_active_offset),
            (Reg::QoffsetL, self.line_reactive_offset),
            (Reg::PoffsetN, self.neutral_active_offset),
            (Reg::QoffsetN, self.neutral_reactive_offset),
        ]
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            function_enable: 0x0030,
            sag_threshold: 0x2630,
            calibration: CalibrationBlock {
                meter_constant_high: 0x0001,
                meter_constant_low: 0xD166,
                line_gain: 0x0000,
                line_phase: 0x0000,
                neutral_gain: 0x0000,
                neutral_phase: 0x0000,
                active_start_threshold: 0x0100,
                active_no_load_threshold: 0x0000,
                reactive_start_threshold: 0x0100,
                reactive_no_load_threshold: 0x0000,
                metering_mode: 0x9022,
            },
            adjustment: AdjustmentBlock {
                voltage_gain: 0x6414,
                line_current_gain: 0xF1F2,
                neutral_current_gain: 0x7530,
                voltage_offset: 0x0000,
                line_current_offset: 0x0000,
                neutral_current_offset: 0x0000,
                line_active_offset: 0x0000,
                line_reactive_offset: 0x0000,
                neutral_active_offset: 0x0000,
                neutral_reactive_offset: 0x0000,
            },
        }
    }
}

impl CalibrationProfile {
    /// Board that only meters the L line. N line registers stay at their reset values.
    pub fn compact() -> Self {
        let default = Self::default();
        Self {
            function_enable: 0x0030,
            sag_threshold: 0x1D6A,
            calibration: CalibrationBlock {
                meter_constant_high: 0x00B9,
                meter_constant_low: 0xC1F3,
                line_gain: 0x1D39,
                active_start_threshold: 0x08BD,
                reactive_start_threshold: 0x0AEC,
                metering_mode: 0x9422,
                ..default.calibration
            },
            adjustment: AdjustmentBlock {
                voltage_gain: 0xD464,
                line_current_gain: 0x6E49,
                ..default.adjustment
            },
        }
    }

    /// checksums the chip expects for this profile, without touching the bus
    pub fn checksums(&self) -> ChecksumPair {
        ChecksumPair {
            cs1: fold(self.calibration.writes().map(|(_, value)| value)),
            cs2: fold(self.adjustment.writes().map(|(_, value)| value)),
        }
    }
}
