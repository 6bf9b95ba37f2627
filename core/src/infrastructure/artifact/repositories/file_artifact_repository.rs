use std::path::{Path, PathBuf};

use crate::domain::{
    common::entities::app_errors::CoreError,
    suitability::{entities::TrainedArtifact, ports::ArtifactRepository},
};

pub const ARTIFACT_FILE: &str = "food_recommendation_model.bin";

/// Artifact trio persisted as one bincode file under the model directory.
#[derive(Debug, Clone)]
pub struct FileArtifactRepository {
    path: PathBuf,
}

impl FileArtifactRepository {
    pub fn new(model_dir: impl AsRef<Path>) -> Self {
        Self {
            path: model_dir.as_ref().join(ARTIFACT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactRepository for FileArtifactRepository {
    async fn load(&self) -> Result<Option<TrainedArtifact>, CoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::Artifact(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        bincode::deserialize(&bytes).map(Some).map_err(|e| {
            CoreError::Artifact(format!(
                "failed to decode {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save(&self, artifact: TrainedArtifact) -> Result<(), CoreError> {
        let bytes = bincode::serialize(&artifact)
            .map_err(|e| CoreError::Artifact(format!("failed to encode artifact: {e}")))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::Artifact(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        // Write-then-rename so a crash mid-save never leaves a truncated
        // artifact behind.
        let staging = self.path.with_extension("bin.tmp");
        tokio::fs::write(&staging, &bytes).await.map_err(|e| {
            CoreError::Artifact(format!("failed to write {}: {e}", staging.display()))
        })?;
        tokio::fs::rename(&staging, &self.path).await.map_err(|e| {
            CoreError::Artifact(format!("failed to move artifact into place: {e}"))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::generate_uuid_v7, suitability::test_support::constant_artifact};

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("oliveml-artifact-{}", generate_uuid_v7()))
    }

    #[tokio::test]
    async fn load_reports_not_trained_when_file_is_missing() {
        let repository = FileArtifactRepository::new(scratch_dir());
        let loaded = repository.load().await.expect("missing file is not an error");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = scratch_dir();
        let repository = FileArtifactRepository::new(&dir);
        let artifact = constant_artifact([1, 0, 1, 0, 1, 0]);

        repository
            .save(artifact.clone())
            .await
            .expect("save succeeds");
        let loaded = repository
            .load()
            .await
            .expect("load succeeds")
            .expect("artifact exists");
        assert_eq!(loaded.metadata.id, artifact.metadata.id);
        assert_eq!(loaded.feature_columns, artifact.feature_columns);

        tokio::fs::remove_dir_all(&dir).await.expect("cleanup");
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = scratch_dir();
        tokio::fs::create_dir_all(&dir).await.expect("scratch dir");
        tokio::fs::write(dir.join(ARTIFACT_FILE), b"not bincode")
            .await
            .expect("write corrupt file");

        let repository = FileArtifactRepository::new(&dir);
        let result = repository.load().await;
        assert!(matches!(result, Err(CoreError::Artifact(_))));

        tokio::fs::remove_dir_all(&dir).await.expect("cleanup");
    }
}
