// SysStatus bit layout
const CAL_ERR: u16 = 0b11 << 14;
const ADJ_ERR: u16 = 0b11 << 12;
const LINE_CHANGE: u16 = 1 << 7;
const REV_Q_CHANGE: u16 = 1 << 6;
const REV_P_CHANGE: u16 = 1 << 5;
const SAG_WARN: u16 = 1 << 1;

/// Decoded system status register.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemStatus(pub u16);

/// Checksum mismatch reported by the chip after the calibration blocks were committed.
///
/// Either the profile constants or the checksum computation are wrong, verify the profile
/// before calibrating again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CalibrationFault {
    pub calibration_block: bool,
    pub adjustment_block: bool,
}

impl From<u16> for SystemStatus {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl SystemStatus {
    /// CS1 does not match the calibration block
    pub fn cs1_error(&self) -> bool {
        self.0 & CAL_ERR == CAL_ERR
    }

    /// CS2 does not match the adjustment block
    pub fn cs2_error(&self) -> bool {
        self.0 & ADJ_ERR == ADJ_ERR
    }

    /// metering switched between the L and N line
    pub fn line_changed(&self) -> bool {
        self.0 & LINE_CHANGE != 0
    }

    pub fn reactive_direction_changed(&self) -> bool {
        self.0 & REV_Q_CHANGE != 0
    }

    pub fn active_direction_changed(&self) -> bool {
        self.0 & REV_P_CHANGE != 0
    }

    pub fn sag_warning(&self) -> bool {
        self.0 & SAG_WARN != 0
    }

    pub fn calibration_fault(&self) -> Option<CalibrationFault> {
        let fault = CalibrationFault {
            calibration_block: self.cs1_error(),
            adjustment_block: self.cs2_error(),
        };
        (fault.calibration_block || fault.adjustment_block).then_some(fault)
    }
}
