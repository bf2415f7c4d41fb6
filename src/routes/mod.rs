// Route exports
pub mod api;
pub mod form;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};

use crate::core::BmiError;
use crate::models::{ErrorResponse, UnitSystem};

/// Application state shared across all handlers
///
/// Built once in the composition root and cloned into each worker.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub default_system: UnitSystem,
}

impl AppState {
    pub fn new(default_system: UnitSystem) -> Self {
        Self { default_system }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(api::configure))
        .configure(form::configure);
}

impl ResponseError for BmiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: "Invalid input".to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

fn bad_request(kind: &str, message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: kind.to_string(),
        message: message.clone(),
        status_code: 400,
    });
    error::InternalError::from_response(message, response).into()
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    bad_request("invalid_json", format!("Invalid JSON: {}", err))
}

/// Handle form payload errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    bad_request("invalid_form", format!("Invalid form: {}", err))
}
