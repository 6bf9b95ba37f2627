use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};
use oliveml_core::domain::health::ports::HealthCheckService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthCheckResponse {
    pub status: String,
    pub message: String,
    pub models_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    description = "Liveness plus whether the trained model artifacts are loaded",
    responses(
        (status = 200, body = HealthCheckResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthCheckResponse> {
    let readiness = state.service.readiness();
    Response::OK(HealthCheckResponse {
        status: "healthy".to_string(),
        message: "ML Service is running".to_string(),
        models_loaded: readiness.models_loaded,
        model_family: readiness.family.map(|family| family.name().to_string()),
        trained_at: readiness.trained_at,
    })
}
