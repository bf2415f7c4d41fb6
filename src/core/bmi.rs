use thiserror::Error;

use crate::core::validation::validate_measurements;
use crate::models::{Measurement, UnitSystem};

/// Conversion factor for the imperial formula (lb/in² to kg/m²)
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Errors that can occur while turning user input into a BMI
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("{field} must be a number, got {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("{field} must be a positive, finite number, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("unknown unit system {0:?}, expected \"metric\" or \"imperial\"")]
    UnknownUnitSystem(String),

    #[error("height and weight do not produce a usable BMI")]
    OutOfRange { height: f64, weight: f64 },
}

impl Measurement {
    /// Build a measurement, rejecting values the formulas cannot use
    ///
    /// Inputs that are individually valid but overflow or underflow the
    /// formula are rejected too, so `bmi()` is always finite and positive.
    pub fn new(height: f64, weight: f64, system: UnitSystem) -> Result<Self, BmiError> {
        validate_measurements(height, weight)?;

        let measurement = Self { height, weight, system };
        let bmi = measurement.bmi();
        if !(bmi.is_finite() && bmi > 0.0) {
            return Err(BmiError::OutOfRange { height, weight });
        }

        Ok(measurement)
    }

    /// BMI for this measurement, rounded to 2 decimal places
    pub fn bmi(&self) -> f64 {
        let raw = match self.system {
            UnitSystem::Metric => {
                let height_m = self.height / 100.0;
                self.weight / (height_m * height_m)
            }
            UnitSystem::Imperial => self.weight / (self.height * self.height) * IMPERIAL_FACTOR,
        };
        round_to_hundredths(raw)
    }
}

/// Calculate Body Mass Index
///
/// Formulas:
/// - metric: `weight_kg / (height_cm / 100)^2`
/// - imperial: `weight_lb / height_in^2 * 703`
///
/// Zero, negative and non-finite inputs are rejected instead of producing
/// infinity or a meaningless negative value, as are inputs whose BMI would
/// overflow to infinity or round down to zero.
pub fn calculate_bmi(height: f64, weight: f64, system: UnitSystem) -> Result<f64, BmiError> {
    Ok(Measurement::new(height, weight, system)?.bmi())
}

/// Round half away from zero to 2 decimal places
#[inline]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        assert_eq!(calculate_bmi(170.0, 70.0, UnitSystem::Metric).unwrap(), 24.22);
        assert_eq!(calculate_bmi(180.0, 81.0, UnitSystem::Metric).unwrap(), 25.0);
    }

    #[test]
    fn test_imperial_bmi() {
        assert_eq!(calculate_bmi(70.0, 180.0, UnitSystem::Imperial).unwrap(), 25.82);
    }

    #[test]
    fn test_zero_height_is_an_error() {
        for system in [UnitSystem::Metric, UnitSystem::Imperial] {
            let err = calculate_bmi(0.0, 70.0, system).unwrap_err();
            assert_eq!(err, BmiError::InvalidMeasurement { field: "height", value: 0.0 });
        }
    }

    #[test]
    fn test_negative_weight_is_an_error() {
        assert!(calculate_bmi(170.0, -70.0, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_extreme_inputs_are_out_of_range() {
        let cases = [
            (1e-200, 70.0, UnitSystem::Metric),
            (1e300, 70.0, UnitSystem::Imperial),
            (1.0, 1e308, UnitSystem::Metric),
            (1e6, 1e-6, UnitSystem::Metric),
        ];

        for (height, weight, system) in cases {
            assert_eq!(
                calculate_bmi(height, weight, system),
                Err(BmiError::OutOfRange { height, weight }),
                "height={} weight={} system={}",
                height,
                weight,
                system
            );
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_hundredths(24.221453), 24.22);
        assert_eq!(round_to_hundredths(25.824489), 25.82);
        assert_eq!(round_to_hundredths(0.125), 0.13);
    }

    #[test]
    fn test_error_messages() {
        let err = BmiError::Parse { field: "height", value: "abc".to_string() };
        assert_eq!(err.to_string(), "height must be a number, got \"abc\"");

        let err = BmiError::UnknownUnitSystem("bogus".to_string());
        assert!(err.to_string().contains("\"bogus\""));
    }
}
