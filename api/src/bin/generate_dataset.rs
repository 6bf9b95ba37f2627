//! Produce the synthetic labeled training table as a CSV file.

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oliveml_api::args::Args;
use oliveml_core::infrastructure::dataset::{
    generator, repositories::CsvDatasetRepository,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let rows = generator::generate_rows(args.model.dataset_seed);
    let repository = CsvDatasetRepository::new(&args.model.dataset_path);
    repository.save(&rows).await?;

    tracing::info!(
        rows = rows.len(),
        path = %repository.path().display(),
        seed = args.model.dataset_seed,
        "dataset generated"
    );
    Ok(())
}
