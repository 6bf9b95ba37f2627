use crate::domain::food::{entities::NutritionalInfo, value_objects::FoodCategory};

pub const FEATURE_COUNT: usize = 4;

/// Canonical feature column order used when fitting a new model. Inference
/// never reads this directly: it follows the column list persisted inside
/// the artifact, so a model trained under an older order keeps working.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] =
    ["calories", "protein", "carbohydrates", "category_encoded"];

pub fn feature_columns() -> Vec<String> {
    FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect()
}

fn feature_values(
    nutrition: &NutritionalInfo,
    category: &str,
) -> [(&'static str, f64); FEATURE_COUNT] {
    [
        ("calories", nutrition.calories),
        ("protein", nutrition.protein),
        ("carbohydrates", nutrition.carbohydrates),
        ("category_encoded", FoodCategory::encode(category)),
    ]
}

/// Encode one food record into the given column order.
///
/// Total over arbitrary records: a column with no matching value
/// contributes 0.0, exactly like an absent nutrition field.
pub fn encode(columns: &[String], nutrition: &NutritionalInfo, category: &str) -> Vec<f64> {
    let values = feature_values(nutrition, category);
    columns
        .iter()
        .map(|column| {
            values
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| *value)
                .unwrap_or(0.0)
        })
        .collect()
}
