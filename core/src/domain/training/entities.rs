use serde::{Deserialize, Serialize};

use crate::domain::{
    food::entities::NutritionalInfo,
    health::entities::HealthCondition,
    suitability::model::ModelFamily,
};

/// One labeled row of the training table, as produced by the dataset
/// generator: nutrition plus raw 1-10 suitability scores per condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub food_id: u32,
    pub food_name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub diabetes_score: f64,
    pub hypertension_score: f64,
    pub heart_disease_score: f64,
    pub cholesterol_score: f64,
    pub obesity_score: f64,
    pub kidney_score: f64,
}

impl DatasetRow {
    pub fn nutritional_info(&self) -> NutritionalInfo {
        NutritionalInfo {
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
        }
    }

    pub fn score(&self, condition: HealthCondition) -> f64 {
        match condition {
            HealthCondition::Diabetes => self.diabetes_score,
            HealthCondition::Hypertension => self.hypertension_score,
            HealthCondition::HeartDisease => self.heart_disease_score,
            HealthCondition::HighCholesterol => self.cholesterol_score,
            HealthCondition::Obesity => self.obesity_score,
            HealthCondition::KidneyDisease => self.kidney_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateEvaluation {
    pub family: ModelFamily,
    pub exact_match_accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionAccuracy {
    pub condition: String,
    pub accuracy: f64,
}

/// Evaluation summary of one training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub total_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub candidates: Vec<CandidateEvaluation>,
    pub selected: ModelFamily,
    pub exact_match_accuracy: f64,
    pub per_condition: Vec<ConditionAccuracy>,
}
