use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use oliveml_core::domain::{
    food::{entities::NutritionalInfo, value_objects::FoodCategory},
    health::entities::HealthCondition,
    suitability::{model::LabelVector, ports::SuitabilityService, value_objects::PredictItemInput},
};

fn default_category() -> String {
    FoodCategory::GrilledItems.name().to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictSuitabilityRequest {
    pub nutritional_info: NutritionalInfo,
    pub category: String,
}

impl Default for PredictSuitabilityRequest {
    fn default() -> Self {
        Self {
            nutritional_info: NutritionalInfo::default(),
            category: default_category(),
        }
    }
}

/// Per-condition suitability on the 0/10 scale (predicted flag times ten).
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityScores {
    pub diabetes: u8,
    pub hypertension: u8,
    pub heart_disease: u8,
    pub high_cholesterol: u8,
    pub obesity: u8,
    pub kidney_disease: u8,
}

impl From<LabelVector> for SuitabilityScores {
    fn from(labels: LabelVector) -> Self {
        let score = |condition: HealthCondition| labels[condition.index()] * 10;
        Self {
            diabetes: score(HealthCondition::Diabetes),
            hypertension: score(HealthCondition::Hypertension),
            heart_disease: score(HealthCondition::HeartDisease),
            high_cholesterol: score(HealthCondition::HighCholesterol),
            obesity: score(HealthCondition::Obesity),
            kidney_disease: score(HealthCondition::KidneyDisease),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictSuitabilityResponse {
    pub success: bool,
    pub suitability_scores: SuitabilityScores,
    pub recommendations: Vec<String>,
}

fn suitability_notes(labels: &LabelVector) -> Vec<String> {
    let mut notes = Vec::new();
    if labels[HealthCondition::Diabetes.index()] == 1 {
        notes.push("Suitable for diabetic patients".to_string());
    }
    if labels[HealthCondition::Hypertension.index()] == 1 {
        notes.push("Suitable for hypertension patients".to_string());
    }
    if labels[HealthCondition::HeartDisease.index()] == 1 {
        notes.push("Heart-healthy option".to_string());
    }
    notes
}

#[utoipa::path(
    post,
    path = "/predict-food-suitability",
    tag = "ml",
    summary = "Predict food suitability",
    description = "Predict per-condition suitability of one food item from its nutrition and category",
    request_body = PredictSuitabilityRequest,
    responses(
        (status = 200, body = PredictSuitabilityResponse),
        (status = 503, description = "Model artifacts not loaded")
    )
)]
pub async fn predict_suitability(
    State(state): State<AppState>,
    Json(request): Json<PredictSuitabilityRequest>,
) -> Result<Response<PredictSuitabilityResponse>, ApiError> {
    let labels = state.service.predict_item(PredictItemInput {
        nutritional_info: request.nutritional_info,
        category: request.category,
    })?;

    Ok(Response::OK(PredictSuitabilityResponse {
        success: true,
        suitability_scores: SuitabilityScores::from(labels),
        recommendations: suitability_notes(&labels),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_flags_times_ten() {
        let scores = SuitabilityScores::from([1, 0, 1, 0, 0, 1]);
        assert_eq!(
            scores,
            SuitabilityScores {
                diabetes: 10,
                hypertension: 0,
                heart_disease: 10,
                high_cholesterol: 0,
                obesity: 0,
                kidney_disease: 10,
            }
        );
    }

    #[test]
    fn notes_cover_the_first_three_conditions_only() {
        assert_eq!(
            suitability_notes(&[1, 1, 1, 1, 1, 1]),
            vec![
                "Suitable for diabetic patients",
                "Suitable for hypertension patients",
                "Heart-healthy option",
            ]
        );
        assert!(suitability_notes(&[0, 0, 0, 1, 1, 1]).is_empty());
    }
}
