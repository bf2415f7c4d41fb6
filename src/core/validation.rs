use crate::core::BmiError;

/// Check that a single measurement is usable by the formulas
#[inline]
pub fn validate_positive(field: &'static str, value: f64) -> Result<f64, BmiError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BmiError::InvalidMeasurement { field, value })
    }
}

/// Validate a height/weight pair before calculation
///
/// Both values must be finite and strictly positive. Height is checked
/// first, so a request with two bad values reports the height.
pub fn validate_measurements(height: f64, weight: f64) -> Result<(), BmiError> {
    validate_positive("height", height)?;
    validate_positive("weight", weight)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_values() {
        assert!(validate_measurements(170.0, 70.0).is_ok());
        assert!(validate_measurements(0.01, 0.01).is_ok());
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(
            validate_measurements(0.0, 70.0),
            Err(BmiError::InvalidMeasurement { field: "height", .. })
        ));
        assert!(matches!(
            validate_measurements(170.0, -5.0),
            Err(BmiError::InvalidMeasurement { field: "weight", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(validate_measurements(f64::NAN, 70.0).is_err());
        assert!(validate_measurements(170.0, f64::INFINITY).is_err());
        assert!(validate_measurements(f64::NEG_INFINITY, 70.0).is_err());
    }

    #[test]
    fn test_height_reported_first() {
        let err = validate_measurements(0.0, 0.0).unwrap_err();
        assert!(matches!(err, BmiError::InvalidMeasurement { field: "height", .. }));
    }
}
