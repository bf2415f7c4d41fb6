use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::BmiError;
use crate::models::domain::UnitSystem;

/// JSON request to calculate a BMI
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateBmiRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    /// Raw tag, parsed by [`CalculateBmiRequest::unit_system`]
    #[serde(default)]
    pub system: Option<String>,
}

impl CalculateBmiRequest {
    /// Requested unit system, or `default_system` when none was sent
    pub fn unit_system(&self, default_system: UnitSystem) -> Result<UnitSystem, BmiError> {
        match self.system.as_deref() {
            Some(tag) => tag.parse(),
            None => Ok(default_system),
        }
    }
}

/// Fields submitted by the HTML form
///
/// Kept as raw strings so that bad input can be echoed back to the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiForm {
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub system: Option<String>,
}
