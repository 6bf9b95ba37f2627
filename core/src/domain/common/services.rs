use std::sync::Arc;

use crate::domain::{
    suitability::{entities::TrainedArtifact, ports::ArtifactRepository},
    training::ports::DatasetRepository,
};

/// Shared service over the injected repositories.
///
/// The trained artifact is loaded once at construction and never refitted
/// afterwards; request handling only reads it.
#[derive(Clone)]
pub struct Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    pub(crate) artifact_repository: AR,
    pub(crate) dataset_repository: DR,
    pub(crate) artifact: Option<Arc<TrainedArtifact>>,
}

impl<AR, DR> Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    pub fn new(
        artifact_repository: AR,
        dataset_repository: DR,
        artifact: Option<TrainedArtifact>,
    ) -> Self {
        Self {
            artifact_repository,
            dataset_repository,
            artifact: artifact.map(Arc::new),
        }
    }

    pub(crate) fn loaded_artifact(&self) -> Option<&TrainedArtifact> {
        self.artifact.as_deref()
    }
}
