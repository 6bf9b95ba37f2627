use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutritional profile of a food item. Fields absent on the wire default to
/// zero so one sparse record never fails a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
}

/// A catalog food item as received from the upstream catalog service.
///
/// `category` stays an opaque string: unknown names are echoed back
/// unchanged and only fall back to the default code at encoding time.
/// `price`, `image` and `description` are pass-through fields the model
/// never reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub nutritional_info: NutritionalInfo,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}
