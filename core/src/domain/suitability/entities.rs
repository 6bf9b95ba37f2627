use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    food::entities::NutritionalInfo,
    suitability::{
        features,
        model::{LabelVector, ModelFamily, MultiOutputModel},
        scaler::StandardScaler,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub family: ModelFamily,
    pub exact_match_accuracy: f64,
}

impl ArtifactMetadata {
    pub fn new(family: ModelFamily, exact_match_accuracy: f64) -> Self {
        Self {
            id: generate_uuid_v7(),
            trained_at: Utc::now(),
            family,
            exact_match_accuracy,
        }
    }
}

/// The artifact trio: classifier set, fitted scaler and feature column
/// order. Produced whole by training, loaded whole by serving, never
/// mutated in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedArtifact {
    pub metadata: ArtifactMetadata,
    pub model: MultiOutputModel,
    pub scaler: StandardScaler,
    pub feature_columns: Vec<String>,
}

impl TrainedArtifact {
    /// Encode, scale and classify one food record.
    pub fn predict(&self, nutrition: &NutritionalInfo, category: &str) -> LabelVector {
        let raw = features::encode(&self.feature_columns, nutrition, category);
        let scaled = self.scaler.transform_row(&raw);
        self.model.predict(&scaled)
    }
}
