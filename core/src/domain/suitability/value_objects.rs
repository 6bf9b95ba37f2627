use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::NutritionalInfo;

/// Input for a single-item suitability prediction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictItemInput {
    pub nutritional_info: NutritionalInfo,
    pub category: String,
}
