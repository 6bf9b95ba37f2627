pub mod csv_dataset_repository;

pub use csv_dataset_repository::CsvDatasetRepository;
