use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The ten menu categories with their fixed integer encoding.
///
/// The code bijection is part of the trained-artifact contract: reordering
/// it invalidates every persisted model, so codes live here and nowhere
/// else. Encoding is total — any name outside the ten maps to
/// `GrilledItems` (code 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FoodCategory {
    SaladsAndGreens,
    LowCarbMeals,
    HighProtein,
    HeartHealthy,
    DiabeticFriendly,
    WholeGrains,
    LeanProtein,
    Vegetarian,
    Soups,
    GrilledItems,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::SaladsAndGreens,
        FoodCategory::LowCarbMeals,
        FoodCategory::HighProtein,
        FoodCategory::HeartHealthy,
        FoodCategory::DiabeticFriendly,
        FoodCategory::WholeGrains,
        FoodCategory::LeanProtein,
        FoodCategory::Vegetarian,
        FoodCategory::Soups,
        FoodCategory::GrilledItems,
    ];

    pub fn code(self) -> u8 {
        match self {
            FoodCategory::SaladsAndGreens => 0,
            FoodCategory::LowCarbMeals => 1,
            FoodCategory::HighProtein => 2,
            FoodCategory::HeartHealthy => 3,
            FoodCategory::DiabeticFriendly => 4,
            FoodCategory::WholeGrains => 5,
            FoodCategory::LeanProtein => 6,
            FoodCategory::Vegetarian => 7,
            FoodCategory::Soups => 8,
            FoodCategory::GrilledItems => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FoodCategory::SaladsAndGreens => "Salads & Greens",
            FoodCategory::LowCarbMeals => "Low-Carb Meals",
            FoodCategory::HighProtein => "High-Protein",
            FoodCategory::HeartHealthy => "Heart-Healthy",
            FoodCategory::DiabeticFriendly => "Diabetic-Friendly",
            FoodCategory::WholeGrains => "Whole Grains",
            FoodCategory::LeanProtein => "Lean Protein",
            FoodCategory::Vegetarian => "Vegetarian",
            FoodCategory::Soups => "Soups",
            FoodCategory::GrilledItems => "Grilled Items",
        }
    }

    /// Total lookup: unknown names encode as the default category.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .unwrap_or_default()
    }

    /// Category code as a model feature.
    pub fn encode(name: &str) -> f64 {
        f64::from(Self::from_name(name).code())
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        FoodCategory::GrilledItems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_a_bijection_over_0_to_9() {
        let mut codes: Vec<u8> = FoodCategory::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        assert_eq!(codes, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for category in FoodCategory::ALL {
            assert_eq!(FoodCategory::from_name(category.name()), category);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_grilled_items() {
        assert_eq!(
            FoodCategory::from_name("Molecular Gastronomy"),
            FoodCategory::GrilledItems
        );
        assert_eq!(FoodCategory::encode("Molecular Gastronomy"), 9.0);
        assert_eq!(FoodCategory::encode(""), 9.0);
    }

    #[test]
    fn known_names_encode_to_their_codes() {
        assert_eq!(FoodCategory::encode("Salads & Greens"), 0.0);
        assert_eq!(FoodCategory::encode("Lean Protein"), 6.0);
        assert_eq!(FoodCategory::encode("Grilled Items"), 9.0);
    }
}
