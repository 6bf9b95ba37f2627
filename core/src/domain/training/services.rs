use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    suitability::ports::ArtifactRepository,
    training::{
        entities::TrainingReport,
        ports::{DatasetRepository, TrainingService},
        trainer,
    },
};

impl<AR, DR> TrainingService for Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    async fn train(&self) -> Result<TrainingReport, CoreError> {
        let rows = self.dataset_repository.load().await?;
        tracing::info!(rows = rows.len(), "dataset loaded");

        let (artifact, report) = trainer::train(&rows)?;
        let artifact_id = artifact.metadata.id;
        self.artifact_repository.save(artifact).await?;

        tracing::info!(
            family = report.selected.name(),
            exact_match_accuracy = report.exact_match_accuracy,
            artifact_id = %artifact_id,
            "model artifacts saved"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        suitability::ports::MockArtifactRepository,
        training::ports::MockDatasetRepository,
    };

    #[tokio::test]
    async fn dataset_load_failure_aborts_before_saving() {
        let artifact_repository = MockArtifactRepository::new();
        let mut dataset_repository = MockDatasetRepository::new();
        dataset_repository.expect_load().returning(|| {
            Box::pin(async {
                Err(CoreError::TrainingData("dataset file not found".to_string()))
            })
        });

        let service = Service::new(artifact_repository, dataset_repository, None);
        let result = service.train().await;
        assert!(matches!(result, Err(CoreError::TrainingData(_))));
        // artifact_repository has no expectations: a save would panic
    }
}
