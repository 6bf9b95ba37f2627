use super::handlers::recommend_foods::{__path_recommend_foods, recommend_foods};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_foods))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/api/ml/recommend-foods",
            state.args.server.root_path
        ),
        post(recommend_foods),
    )
}
