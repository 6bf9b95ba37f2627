use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::entities::HealthCondition,
    recommendation::{
        ports::RecommendationService,
        value_objects::{RankedRecommendations, Recommendation, RecommendFoodsInput},
    },
    suitability::ports::ArtifactRepository,
    training::ports::DatasetRepository,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl<AR, DR> RecommendationService for Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    fn recommend_foods(
        &self,
        input: RecommendFoodsInput,
    ) -> Result<RankedRecommendations, CoreError> {
        let artifact = self.loaded_artifact().ok_or(CoreError::ModelNotLoaded)?;

        let active_conditions = input.health_profile.conditions.active();
        // Condition names with no label mapping drop out of numerator and
        // denominator both; an empty constraint set disqualifies nothing.
        let known: Vec<HealthCondition> = active_conditions
            .iter()
            .filter_map(|key| HealthCondition::from_key(key))
            .collect();

        let mut recommendations: Vec<Recommendation> = input
            .foods
            .iter()
            .map(|food| {
                let score = if known.is_empty() {
                    100.0
                } else {
                    let labels = artifact.predict(&food.nutritional_info, &food.category);
                    let matched = known
                        .iter()
                        .filter(|condition| labels[condition.index()] == 1)
                        .count();
                    round2(matched as f64 / known.len() as f64 * 100.0)
                };
                Recommendation::from_food(food, score)
            })
            .collect();

        // Stable sort: equal scores keep their input order.
        recommendations.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
        recommendations.truncate(input.top_n);

        Ok(RankedRecommendations {
            recommendations,
            active_conditions,
            total_foods: input.foods.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food::entities::{FoodItem, NutritionalInfo},
        health::entities::{ConditionFlags, HealthProfile},
        suitability::{
            entities::TrainedArtifact, ports::MockArtifactRepository,
            test_support::constant_artifact,
        },
        training::ports::MockDatasetRepository,
    };

    fn service_with(
        artifact: Option<TrainedArtifact>,
    ) -> Service<MockArtifactRepository, MockDatasetRepository> {
        Service::new(
            MockArtifactRepository::new(),
            MockDatasetRepository::new(),
            artifact,
        )
    }

    fn food(id: &str, calories: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("food {id}"),
            category: "Soups".to_string(),
            nutritional_info: NutritionalInfo {
                calories,
                protein: 10.0,
                carbohydrates: 20.0,
            },
            ..Default::default()
        }
    }

    fn input(conditions: ConditionFlags, foods: Vec<FoodItem>, top_n: usize) -> RecommendFoodsInput {
        RecommendFoodsInput {
            health_profile: HealthProfile { conditions },
            foods,
            top_n,
        }
    }

    #[test]
    fn refuses_when_model_is_not_loaded() {
        let service = service_with(None);
        let result = service.recommend_foods(input(
            ConditionFlags::default(),
            vec![food("a", 100.0)],
            10,
        ));
        assert!(matches!(result, Err(CoreError::ModelNotLoaded)));
    }

    #[test]
    fn no_active_conditions_scores_every_food_100() {
        // All-zero classifiers would fail any food that actually got
        // predicted; with no constraints they must never run.
        let service = service_with(Some(constant_artifact([0; 6])));
        let ranked = service
            .recommend_foods(input(
                ConditionFlags::default(),
                vec![food("a", 100.0), food("b", 900.0)],
                10,
            ))
            .expect("artifact is loaded");

        assert!(ranked.active_conditions.is_empty());
        assert_eq!(ranked.total_foods, 2);
        assert!(
            ranked
                .recommendations
                .iter()
                .all(|r| r.suitability_score == 100.0)
        );
    }

    #[test]
    fn score_is_matched_over_active_conditions() {
        // diabetes and obesity suitable, hypertension not
        let service = service_with(Some(constant_artifact([1, 0, 0, 0, 1, 0])));
        let flags = ConditionFlags {
            diabetes: true,
            hypertension: true,
            obesity: true,
            ..Default::default()
        };
        let ranked = service
            .recommend_foods(input(flags, vec![food("a", 100.0)], 10))
            .expect("artifact is loaded");

        assert_eq!(
            ranked.active_conditions,
            vec!["diabetes", "hypertension", "obesity"]
        );
        // 2 of 3 active conditions matched
        assert_eq!(ranked.recommendations[0].suitability_score, 66.67);
    }

    #[test]
    fn unknown_condition_names_are_excluded_from_scoring() {
        let service = service_with(Some(constant_artifact([1, 0, 0, 0, 0, 0])));
        let mut flags = ConditionFlags {
            diabetes: true,
            ..Default::default()
        };
        flags.other.insert("gout".to_string(), true);

        let ranked = service
            .recommend_foods(input(flags, vec![food("a", 100.0)], 10))
            .expect("artifact is loaded");

        // "gout" is reported as active but does not dilute the score
        assert_eq!(ranked.active_conditions, vec!["diabetes", "gout"]);
        assert_eq!(ranked.recommendations[0].suitability_score, 100.0);
    }

    #[test]
    fn only_unknown_conditions_means_no_constraints() {
        let service = service_with(Some(constant_artifact([0; 6])));
        let mut flags = ConditionFlags::default();
        flags.other.insert("gout".to_string(), true);

        let ranked = service
            .recommend_foods(input(flags, vec![food("a", 100.0)], 10))
            .expect("artifact is loaded");
        assert_eq!(ranked.recommendations[0].suitability_score, 100.0);
    }

    #[test]
    fn ties_preserve_input_order_and_truncation_applies() {
        let service = service_with(Some(constant_artifact([1, 0, 0, 0, 0, 0])));
        let flags = ConditionFlags {
            diabetes: true,
            ..Default::default()
        };
        let foods = vec![
            food("first", 100.0),
            food("second", 200.0),
            food("third", 300.0),
        ];

        let ranked = service
            .recommend_foods(input(flags, foods, 2))
            .expect("artifact is loaded");

        // every food scores 100: stable order, truncated to top_n
        assert_eq!(ranked.recommendations.len(), 2);
        assert_eq!(ranked.recommendations[0].food_id, "first");
        assert_eq!(ranked.recommendations[1].food_id, "second");
        assert_eq!(ranked.total_foods, 3);
    }

    #[test]
    fn truncation_is_bounded_by_input_length() {
        let service = service_with(Some(constant_artifact([0; 6])));
        let ranked = service
            .recommend_foods(input(
                ConditionFlags::default(),
                vec![food("a", 100.0)],
                10,
            ))
            .expect("artifact is loaded");
        assert_eq!(ranked.recommendations.len(), 1);
    }

    #[test]
    fn end_to_end_diabetes_ranking_prefers_the_lighter_food() {
        use crate::{domain::training::trainer, infrastructure::dataset::generator};

        let rows = generator::generate_rows(42);
        let (artifact, _) = trainer::train(&rows).expect("training succeeds");
        let service = service_with(Some(artifact));

        let lean = FoodItem {
            id: "lean".to_string(),
            name: "Grilled Chicken Salad".to_string(),
            category: "Lean Protein".to_string(),
            nutritional_info: NutritionalInfo {
                calories: 250.0,
                protein: 35.0,
                carbohydrates: 15.0,
            },
            ..Default::default()
        };
        let heavy = FoodItem {
            id: "heavy".to_string(),
            name: "Fried Chicken Burger".to_string(),
            category: "High-Protein".to_string(),
            nutritional_info: NutritionalInfo {
                calories: 680.0,
                protein: 28.0,
                carbohydrates: 52.0,
            },
            ..Default::default()
        };

        let flags = ConditionFlags {
            diabetes: true,
            ..Default::default()
        };
        let ranked = service
            .recommend_foods(input(flags, vec![lean, heavy], 2))
            .expect("artifact is loaded");

        assert_eq!(ranked.recommendations.len(), 2);
        let score_of = |id: &str| {
            ranked
                .recommendations
                .iter()
                .find(|r| r.food_id == id)
                .map(|r| r.suitability_score)
                .expect("food is in the ranking")
        };
        assert!(score_of("lean") >= score_of("heavy"));
    }

    #[test]
    fn description_defaults_to_empty_string() {
        let service = service_with(Some(constant_artifact([0; 6])));
        let ranked = service
            .recommend_foods(input(
                ConditionFlags::default(),
                vec![food("a", 100.0)],
                10,
            ))
            .expect("artifact is loaded");
        assert_eq!(ranked.recommendations[0].description, "");
    }
}
