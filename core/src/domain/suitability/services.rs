use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    suitability::{
        model::LabelVector,
        ports::{ArtifactRepository, SuitabilityService},
        value_objects::PredictItemInput,
    },
    training::ports::DatasetRepository,
};

impl<AR, DR> SuitabilityService for Service<AR, DR>
where
    AR: ArtifactRepository,
    DR: DatasetRepository,
{
    fn predict_item(&self, input: PredictItemInput) -> Result<LabelVector, CoreError> {
        let artifact = self.loaded_artifact().ok_or(CoreError::ModelNotLoaded)?;
        Ok(artifact.predict(&input.nutritional_info, &input.category))
    }
}
