use heapless::String;
use serde::{Deserialize, Serialize};

use crate::chip::CalibrationProfile;
use crate::conversion::ConversionParameters;

/// Everything that differs between two installations of the meter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeterConfig {
    /// free text to tell installations apart in logs
    pub label: String<32>,
    pub profile: CalibrationProfile,
    pub conversion: ConversionParameters,
}

impl MeterConfig {
    pub fn validate(&self) -> bool {
        let scale = self.conversion.voltage_scale;
        scale.is_finite() && scale > 0.0
    }

    /// preset of the L line only board
    pub fn compact() -> Self {
        Self {
            label: String::new(),
            profile: CalibrationProfile::compact(),
            conversion: ConversionParameters::compact(),
        }
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            profile: Default::default(),
            conversion: Default::default(),
        }
    }
}
