use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    training::entities::{DatasetRow, TrainingReport},
};

/// Access to the labeled training table.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Vec<DatasetRow>, CoreError>> + Send;
}

/// The offline training batch.
#[cfg_attr(test, mockall::automock)]
pub trait TrainingService: Send + Sync {
    /// Load the dataset, run the pipeline and persist the artifact trio.
    /// Aborts before anything is written when the dataset is missing or
    /// empty.
    fn train(&self) -> impl Future<Output = Result<TrainingReport, CoreError>> + Send;
}
