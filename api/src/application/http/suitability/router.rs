use super::handlers::predict_suitability::{__path_predict_suitability, predict_suitability};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict_suitability))]
pub struct SuitabilityApiDoc;

pub fn suitability_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/api/ml/predict-food-suitability",
            state.args.server.root_path
        ),
        post(predict_suitability),
    )
}
