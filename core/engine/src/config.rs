//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Settings that shape how expressions are evaluated.
//! CONTEXT: Loaded from JSON by the host application. Every field is
//! optional in the document; missing fields take the defaults below.

use crate::error::ConfigError;
use crate::provider::DEFAULT_TAN_TOLERANCE;
use calc_parser::Associativity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Value substituted for `pi` and `PI`.
    pub pi: f64,
    /// Value substituted for `e` and `E`.
    pub e: f64,
    /// Grouping of chained `^`. Left keeps `2^3^2 = 64`.
    pub power_associativity: Associativity,
    pub tan_tolerance: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            pi: std::f64::consts::PI,
            e: std::f64::consts::E,
            power_associativity: Associativity::Left,
            tan_tolerance: DEFAULT_TAN_TOLERANCE,
        }
    }
}

impl EvaluatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EvaluatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.pi.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "pi",
                value: self.pi,
            });
        }
        if !self.e.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "e",
                value: self.e,
            });
        }
        if !self.tan_tolerance.is_finite() || self.tan_tolerance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "tan_tolerance",
                value: self.tan_tolerance,
            });
        }
        Ok(())
    }
}
