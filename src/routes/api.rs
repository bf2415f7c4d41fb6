use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::calculate_bmi;
use crate::models::{BmiResponse, CalculateBmiRequest, ErrorResponse, HealthResponse};
use crate::routes::AppState;

/// Configure JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/bmi", web::post().to(calculate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Calculate BMI endpoint
///
/// POST /api/v1/bmi
///
/// Request body:
/// ```json
/// {
///   "height": 170,
///   "weight": 70,
///   "system": "metric|imperial"
/// }
/// ```
///
/// `system` may be omitted, in which case the configured default applies.
async fn calculate(
    state: web::Data<AppState>,
    req: web::Json<CalculateBmiRequest>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for calculate request: field_errors={:?}", errors);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    let (bmi, system) = req
        .unit_system(state.default_system)
        .and_then(|system| Ok((calculate_bmi(req.height, req.weight, system)?, system)))
        .inspect_err(|e| tracing::info!("Rejected calculate request: {}", e))?;

    tracing::debug!(
        "Calculated BMI {} from height={} weight={} system={}",
        bmi,
        req.height,
        req.weight,
        system
    );

    Ok(HttpResponse::Ok().json(BmiResponse {
        bmi,
        height: req.height,
        weight: req.weight,
        system,
    }))
}
