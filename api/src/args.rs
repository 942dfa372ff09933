use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use foodhealth_core::domain::{
    classification::entities::DEFAULT_TOP_K,
    common::{FoodHealthConfig, ModelConfig, NutritionConfig},
    health_index::value_objects::HealthIndexConfig,
    image::value_objects::PreprocessConfig,
    prediction::value_objects::PredictionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodhealth-api", about = "Food Health Classifier API", version)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub inference: InferenceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Largest accepted upload, in bytes.
    #[arg(long = "max-upload-bytes", env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ModelArgs {
    #[arg(long = "model-dir", env = "MODEL_DIR", default_value = "model")]
    pub model_dir: PathBuf,

    #[arg(long = "model-file", env = "MODEL_FILE", default_value = "model.onnx")]
    pub model_file: String,

    #[arg(long = "labels-file", env = "LABELS_FILE", default_value = "labels_food101.json")]
    pub labels_file: String,

    #[arg(long = "model-config-file", env = "MODEL_CONFIG_FILE", default_value = "config.json")]
    pub config_file: String,

    /// JSON nutrition table replacing the built-in one.
    #[arg(long = "nutrition-file", env = "NUTRITION_FILE")]
    pub nutrition_file: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct InferenceArgs {
    /// Probability in `[0, 1]` below which a prediction is reported as unknown.
    #[arg(
        long = "confidence-threshold",
        env = "CONFIDENCE_THRESHOLD",
        default_value_t = 0.5,
        value_parser = parse_probability
    )]
    pub confidence_threshold: f64,

    /// Number of ranked classes returned, between 1 and 5.
    #[arg(long = "top-k", env = "TOP_K", default_value_t = 5, value_parser = parse_top_k)]
    pub top_k: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let probability: f64 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;

    if !(0.0..=1.0).contains(&probability) {
        return Err(format!("`{value}` is not a probability between 0 and 1"));
    }

    Ok(probability)
}

fn parse_top_k(value: &str) -> Result<usize, String> {
    let top_k: usize = value
        .parse()
        .map_err(|e| format!("`{value}` is not a positive integer: {e}"))?;

    if !(1..=DEFAULT_TOP_K).contains(&top_k) {
        return Err(format!("top-k must be between 1 and {DEFAULT_TOP_K}, got {top_k}"));
    }

    Ok(top_k)
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["foodhealth-api"])
    }
}

impl From<Args> for FoodHealthConfig {
    fn from(args: Args) -> Self {
        FoodHealthConfig {
            model: ModelConfig {
                model_dir: args.model.model_dir,
                model_file: args.model.model_file,
                labels_file: args.model.labels_file,
                config_file: args.model.config_file,
            },
            nutrition: NutritionConfig {
                table_path: args.model.nutrition_file,
            },
            preprocess: PreprocessConfig::default(),
            prediction: PredictionConfig {
                confidence_threshold: args.inference.confidence_threshold,
                top_k: args.inference.top_k,
                ..PredictionConfig::default()
            },
            health_index: HealthIndexConfig::default(),
        }
    }
}
