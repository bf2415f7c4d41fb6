// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Measurement, UnitSystem};
pub use requests::{BmiForm, CalculateBmiRequest};
pub use responses::{BmiResponse, ErrorResponse, HealthResponse};
