use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use oliveml_core::domain::{
    food::entities::FoodItem,
    health::entities::HealthProfile,
    recommendation::{
        ports::RecommendationService,
        value_objects::{RankedRecommendations, Recommendation, RecommendFoodsInput},
    },
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendFoodsRequest {
    pub health_profile: HealthProfile,
    pub foods: Vec<FoodItem>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendFoodsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub active_conditions: Vec<String>,
    pub total_foods: usize,
}

impl From<RankedRecommendations> for RecommendFoodsResponse {
    fn from(ranked: RankedRecommendations) -> Self {
        Self {
            success: true,
            recommendations: ranked.recommendations,
            active_conditions: ranked.active_conditions,
            total_foods: ranked.total_foods,
        }
    }
}

#[utoipa::path(
    post,
    path = "/recommend-foods",
    tag = "ml",
    summary = "Recommend foods",
    description = "Rank a candidate food list against the user's active health conditions",
    request_body = RecommendFoodsRequest,
    responses(
        (status = 200, body = RecommendFoodsResponse),
        (status = 503, description = "Model artifacts not loaded")
    )
)]
#[axum_macros::debug_handler]
pub async fn recommend_foods(
    State(state): State<AppState>,
    Json(request): Json<RecommendFoodsRequest>,
) -> Result<Response<RecommendFoodsResponse>, ApiError> {
    let top_n = request
        .top_n
        .unwrap_or(state.args.model.default_recommendations)
        .min(state.args.model.max_recommendations);

    let ranked = state.service.recommend_foods(RecommendFoodsInput {
        health_profile: request.health_profile,
        foods: request.foods,
        top_n,
    })?;

    Ok(Response::OK(RecommendFoodsResponse::from(ranked)))
}
