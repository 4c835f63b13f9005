//! Controller configuration parameters
//!
//! Initial thresholds for the [`Controller`](crate::app::controller::Controller).
//! Readings and thresholds share one unit (whole degrees).

use serde::{Deserialize, Serialize};

use crate::control::band::Band;
use crate::error::ConfigError;

/// Threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Below this reading the heater is switched on
    pub lower_threshold: i32,
    /// Above this reading the window is opened
    pub upper_threshold: i32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            lower_threshold: 25,
            upper_threshold: 28,
        }
    }
}

impl ControllerConfig {
    /// Check the threshold pair and return it as a [`Band`].
    pub fn band(&self) -> Result<Band, ConfigError> {
        Ok(Band::new(self.lower_threshold, self.upper_threshold)?)
    }

    /// Parse and validate a JSON document.  Missing fields take defaults;
    /// unknown fields are rejected.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| {
            log::warn!("Config parse failed: {}", e);
            ConfigError::Parse
        })?;
        config.band()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| {
            log::warn!("Config encode failed: {}", e);
            ConfigError::Encode
        })
    }
}

impl From<Band> for ControllerConfig {
    fn from(band: Band) -> Self {
        Self {
            lower_threshold: band.lower(),
            upper_threshold: band.upper(),
        }
    }
}
