// Core calculation exports
pub mod bmi;
pub mod validation;

pub use bmi::{calculate_bmi, round_to_hundredths, BmiError, IMPERIAL_FACTOR};
pub use validation::{validate_measurements, validate_positive};
