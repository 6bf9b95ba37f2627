//! Offline training batch: load the dataset, fit and evaluate the
//! candidate families, persist the best artifact trio.

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oliveml_api::args::Args;
use oliveml_core::{
    application::create_service,
    domain::{common::OliveConfig, training::ports::TrainingService},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let service = create_service(OliveConfig::from(args)).await?;
    let report = service.train().await?;

    for candidate in &report.candidates {
        tracing::info!(
            family = candidate.family.name(),
            exact_match_accuracy = candidate.exact_match_accuracy,
            "candidate"
        );
    }
    for condition in &report.per_condition {
        tracing::info!(
            condition = %condition.condition,
            accuracy = condition.accuracy,
            "per-condition accuracy"
        );
    }
    tracing::info!(
        selected = report.selected.name(),
        exact_match_accuracy = report.exact_match_accuracy,
        train_rows = report.train_rows,
        test_rows = report.test_rows,
        "training completed"
    );
    Ok(())
}
