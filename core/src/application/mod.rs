use crate::{
    domain::common::{OliveConfig, services::Service},
    domain::suitability::ports::ArtifactRepository,
    infrastructure::{
        artifact::repositories::FileArtifactRepository,
        dataset::repositories::CsvDatasetRepository,
    },
};

pub type OliveService = Service<FileArtifactRepository, CsvDatasetRepository>;

/// Wire the concrete repositories and load the artifact trio once.
///
/// A missing or unreadable artifact leaves the service in the explicit
/// "not loaded" state instead of failing startup; the training batch and
/// the readiness endpoint both still work without it.
pub async fn create_service(config: OliveConfig) -> Result<OliveService, anyhow::Error> {
    let artifact_repository = FileArtifactRepository::new(&config.model.model_dir);
    let dataset_repository = CsvDatasetRepository::new(&config.model.dataset_path);

    let artifact = match artifact_repository.load().await {
        Ok(Some(artifact)) => {
            tracing::info!(
                family = artifact.model.family().name(),
                exact_match_accuracy = artifact.metadata.exact_match_accuracy,
                trained_at = %artifact.metadata.trained_at,
                "model artifacts loaded"
            );
            Some(artifact)
        }
        Ok(None) => {
            tracing::warn!("model artifacts not found; train the model first");
            None
        }
        Err(e) => {
            tracing::error!("failed to load model artifacts: {e}");
            None
        }
    };

    Ok(Service::new(artifact_repository, dataset_repository, artifact))
}
