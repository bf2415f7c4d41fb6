use actix_web::{error, http::StatusCode, web, HttpResponse};
use askama::Template;

use crate::core::BmiError;
use crate::models::{BmiForm, Measurement, UnitSystem};
use crate::routes::AppState;

/// The single form page, empty or with a submitted result
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub height: String,
    pub weight: String,
    pub metric_selected: bool,
    pub height_unit: &'static str,
    pub weight_unit: &'static str,
    pub bmi_result: Option<String>,
    pub error: Option<String>,
}

impl IndexTemplate {
    /// Empty form with `system` preselected
    pub fn blank(system: UnitSystem) -> Self {
        Self {
            height: String::new(),
            weight: String::new(),
            metric_selected: system == UnitSystem::Metric,
            height_unit: system.height_unit(),
            weight_unit: system.weight_unit(),
            bmi_result: None,
            error: None,
        }
    }

    /// Form echoing the submitted fields
    pub fn echo(form: &BmiForm, system: UnitSystem) -> Self {
        Self {
            height: form.height.trim().to_string(),
            weight: form.weight.trim().to_string(),
            ..Self::blank(system)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(show_form))
            .route(web::post().to(submit_form)),
    );
}

/// Turn raw form fields into a validated measurement
///
/// A missing `system` field falls back to `default_system`; any value that
/// is present must name a known unit system.
pub fn parse_form(form: &BmiForm, default_system: UnitSystem) -> Result<Measurement, BmiError> {
    let system = match form.system.as_deref() {
        Some(tag) => tag.parse()?,
        None => default_system,
    };
    let height = parse_field("height", &form.height)?;
    let weight = parse_field("weight", &form.weight)?;

    Measurement::new(height, weight, system)
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, BmiError> {
    raw.trim().parse().map_err(|_| BmiError::Parse {
        field,
        value: raw.to_string(),
    })
}

/// GET /
async fn show_form(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    render(StatusCode::OK, &IndexTemplate::blank(state.default_system))
}

/// POST /
///
/// Renders the page again with the submitted values and either the BMI or
/// the reason it could not be calculated.
async fn submit_form(
    state: web::Data<AppState>,
    form: web::Form<BmiForm>,
) -> actix_web::Result<HttpResponse> {
    match parse_form(&form, state.default_system) {
        Ok(measurement) => {
            let bmi = measurement.bmi();
            tracing::debug!(
                "Calculated BMI {} from height={} weight={} system={}",
                bmi,
                measurement.height,
                measurement.weight,
                measurement.system
            );

            let page = IndexTemplate {
                bmi_result: Some(format!("{:.2}", bmi)),
                ..IndexTemplate::echo(&form, measurement.system)
            };
            render(StatusCode::OK, &page)
        }
        Err(e) => {
            tracing::info!("Rejected form submission: {}", e);

            let system = form
                .system
                .as_deref()
                .and_then(|tag| tag.parse().ok())
                .unwrap_or(state.default_system);
            let page = IndexTemplate {
                error: Some(e.to_string()),
                ..IndexTemplate::echo(&form, system)
            };
            render(StatusCode::BAD_REQUEST, &page)
        }
    }
}

fn render(status: StatusCode, page: &IndexTemplate) -> actix_web::Result<HttpResponse> {
    let body = page.render().map_err(|e| {
        tracing::error!("Failed to render form page: {}", e);
        error::ErrorInternalServerError("failed to render page")
    })?;

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}
