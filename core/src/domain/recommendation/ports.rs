use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::value_objects::{RankedRecommendations, RecommendFoodsInput},
};

/// Ranking of a candidate food list against a health profile.
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend_foods(
        &self,
        input: RecommendFoodsInput,
    ) -> Result<RankedRecommendations, CoreError>;
}
