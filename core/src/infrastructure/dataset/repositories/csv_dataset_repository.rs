use std::path::{Path, PathBuf};

use crate::domain::{
    common::entities::app_errors::CoreError,
    training::{entities::DatasetRow, ports::DatasetRepository},
};

/// The labeled training table as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvDatasetRepository {
    path: PathBuf,
}

impl CsvDatasetRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write rows back out, header first. Used by the dataset generator.
    pub async fn save(&self, rows: &[DatasetRow]) -> Result<(), CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row).map_err(|e| {
                CoreError::TrainingData(format!("failed to encode dataset row: {e}"))
            })?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::TrainingData(format!("failed to flush dataset: {e}")))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::TrainingData(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            CoreError::TrainingData(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

impl DatasetRepository for CsvDatasetRepository {
    async fn load(&self) -> Result<Vec<DatasetRow>, CoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::TrainingData(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<DatasetRow>, _>>()
            .map_err(|e| {
                CoreError::TrainingData(format!("failed to parse {}: {e}", self.path.display()))
            })?;

        if rows.is_empty() {
            return Err(CoreError::TrainingData(format!(
                "dataset {} has no rows",
                self.path.display()
            )));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn scratch_file() -> PathBuf {
        std::env::temp_dir().join(format!("oliveml-dataset-{}.csv", generate_uuid_v7()))
    }

    fn sample_row() -> DatasetRow {
        DatasetRow {
            food_id: 1,
            food_name: "Vegetable Soup".to_string(),
            category: "Soups".to_string(),
            calories: 120.0,
            protein: 5.0,
            carbohydrates: 18.0,
            diabetes_score: 8.0,
            hypertension_score: 9.0,
            heart_disease_score: 7.0,
            cholesterol_score: 6.0,
            obesity_score: 8.0,
            kidney_score: 7.0,
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_training_data_error() {
        let repository = CsvDatasetRepository::new(scratch_file());
        let result = repository.load().await;
        assert!(matches!(result, Err(CoreError::TrainingData(_))));
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = scratch_file();
        let repository = CsvDatasetRepository::new(&path);
        let rows = vec![sample_row()];

        repository.save(&rows).await.expect("save succeeds");
        let loaded = repository.load().await.expect("load succeeds");
        assert_eq!(loaded, rows);

        tokio::fs::remove_file(&path).await.expect("cleanup");
    }

    #[tokio::test]
    async fn file_without_rows_is_rejected() {
        let path = scratch_file();
        let repository = CsvDatasetRepository::new(&path);
        repository.save(&[]).await.expect("save succeeds");

        let result = repository.load().await;
        assert!(matches!(result, Err(CoreError::TrainingData(_))));

        tokio::fs::remove_file(&path).await.expect("cleanup");
    }
}
