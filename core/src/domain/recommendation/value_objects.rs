use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    food::entities::{FoodItem, NutritionalInfo},
    health::entities::HealthProfile,
};

#[derive(Debug, Clone)]
pub struct RecommendFoodsInput {
    pub health_profile: HealthProfile,
    pub foods: Vec<FoodItem>,
    pub top_n: usize,
}

/// One ranked food with its aggregate suitability score (0-100, two
/// decimal places).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub food_id: String,
    pub name: String,
    pub category: String,
    pub suitability_score: f64,
    pub nutritional_info: NutritionalInfo,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub description: String,
}

impl Recommendation {
    pub fn from_food(food: &FoodItem, suitability_score: f64) -> Self {
        Self {
            food_id: food.id.clone(),
            name: food.name.clone(),
            category: food.category.clone(),
            suitability_score,
            nutritional_info: food.nutritional_info.clone(),
            image: food.image.clone(),
            price: food.price,
            description: food.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub active_conditions: Vec<String>,
    pub total_foods: usize,
}
