mod structs;
pub use structs::*;

use log::warn;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Json(serde_json_core::de::Error),
    InvalidVoltageScale,
}

impl MeterConfig {
    /// Parse and validate a JSON document, e.g. as uploaded by a configuration tool.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let (config, _) = serde_json_core::from_slice::<MeterConfig>(json).map_err(|e| {
            warn!("error decoding meter config {e:?}");
            ConfigError::Json(e)
        })?;

        if !config.validate() {
            warn!("meter config {} has an invalid voltage scale", config.label);
            return Err(ConfigError::InvalidVoltageScale);
        }

        Ok(config)
    }
}
