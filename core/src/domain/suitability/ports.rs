use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    suitability::{entities::TrainedArtifact, model::LabelVector, value_objects::PredictItemInput},
};

/// Persistence of the artifact trio between training and serving.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRepository: Send + Sync {
    /// `Ok(None)` means "not trained yet" — a reportable state, not an
    /// error.
    fn load(&self) -> impl Future<Output = Result<Option<TrainedArtifact>, CoreError>> + Send;

    fn save(&self, artifact: TrainedArtifact) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Single-item suitability prediction.
#[cfg_attr(test, mockall::automock)]
pub trait SuitabilityService: Send + Sync {
    fn predict_item(&self, input: PredictItemInput) -> Result<LabelVector, CoreError>;
}
