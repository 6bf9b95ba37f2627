use thiserror::Error;

/// Error taxonomy of the core.
///
/// Malformed food records and health profiles are never errors: encoding
/// recovers them through defaults. Only artifact absence, artifact storage
/// failures and unusable training data surface as hard errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("model artifacts are not loaded")]
    ModelNotLoaded,

    #[error("training data error: {0}")]
    TrainingData(String),

    #[error("artifact storage error: {0}")]
    Artifact(String),

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("internal server error")]
    InternalServerError,
}
