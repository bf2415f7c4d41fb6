//! BMI Web - Body Mass Index calculator served as a web form and JSON API
//!
//! The calculation itself lives in [`core`] and has no knowledge of HTTP.
//! [`routes`] wires it to an HTML form page and a small JSON API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{calculate_bmi, BmiError};
pub use models::{Measurement, UnitSystem};
pub use routes::AppState;
