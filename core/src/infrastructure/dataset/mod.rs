pub mod generator;
pub mod repositories;
