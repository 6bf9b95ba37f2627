pub mod file_artifact_repository;

pub use file_artifact_repository::FileArtifactRepository;
