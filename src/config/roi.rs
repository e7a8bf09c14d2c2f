//! ROI configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::financial::DEFAULT_EFFICIENCY_BASE;

/// Quick ROI settings
#[derive(Debug, Clone, Deserialize)]
pub struct RoiConfig {
    /// Monthly value of one percentage point of efficiency, times 100
    #[serde(default = "default_efficiency_base")]
    pub efficiency_base: f64,
}

impl RoiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.efficiency_base.is_finite() || self.efficiency_base <= 0.0 {
            return Err(ValidationError::InvalidEfficiencyBase);
        }
        Ok(())
    }
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            efficiency_base: default_efficiency_base(),
        }
    }
}

fn default_efficiency_base() -> f64 {
    DEFAULT_EFFICIENCY_BASE
}
