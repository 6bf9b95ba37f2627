use crate::domain::{
    common::services::Service,
    health::{
        entities::ModelHealthStatus,
        ports::HealthCheckService,
    },
    suitability::ports::ArtifactRepository,
    training::ports::DatasetRepository,
};

impl<AR, DR> HealthCheckService for Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    fn readiness(&self) -> ModelHealthStatus {
        match self.loaded_artifact() {
            Some(artifact) => ModelHealthStatus {
                models_loaded: true,
                family: Some(artifact.model.family()),
                trained_at: Some(artifact.metadata.trained_at),
            },
            None => ModelHealthStatus {
                models_loaded: false,
                family: None,
                trained_at: None,
            },
        }
    }
}
