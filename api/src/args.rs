use std::path::PathBuf;

use clap::Parser;
use oliveml_core::domain::common::{ModelConfig, OliveConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "oliveml-api", about = "Olive ML food recommendation service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "5001")]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/olive".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://localhost:5174"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    /// Directory holding the trained artifact trio.
    #[arg(long, env = "MODEL_DIR", default_value = "models")]
    pub model_dir: PathBuf,

    #[arg(long, env = "DATASET_PATH", default_value = "data/food_health_dataset.csv")]
    pub dataset_path: PathBuf,

    #[arg(long, env = "DATASET_SEED", default_value = "42")]
    pub dataset_seed: u64,

    #[arg(long, env = "DEFAULT_RECOMMENDATIONS", default_value = "10")]
    pub default_recommendations: usize,

    #[arg(long, env = "MAX_RECOMMENDATIONS", default_value = "50")]
    pub max_recommendations: usize,
}

impl From<Args> for OliveConfig {
    fn from(args: Args) -> Self {
        OliveConfig {
            model: ModelConfig {
                model_dir: args.model.model_dir,
                dataset_path: args.model.dataset_path,
            },
        }
    }
}
