use super::handlers::calculate_bmi::{__path_calculate_bmi, calculate_bmi};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(calculate_bmi))]
pub struct BmiApiDoc;

pub fn bmi_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/ml/calculate-bmi", state.args.server.root_path),
        post(calculate_bmi),
    )
}
