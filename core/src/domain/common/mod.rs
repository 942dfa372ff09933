use std::path::PathBuf;

use crate::domain::{
    health_index::value_objects::HealthIndexConfig, image::value_objects::PreprocessConfig,
    prediction::value_objects::PredictionConfig,
};

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct FoodHealthConfig {
    pub model: ModelConfig,
    pub nutrition: NutritionConfig,
    pub preprocess: PreprocessConfig,
    pub prediction: PredictionConfig,
    pub health_index: HealthIndexConfig,
}

/// Location of the pretrained classifier artifacts.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub model_dir: PathBuf,
    pub model_file: String,
    pub labels_file: String,
    /// Training config written next to the weights. Optional on disk.
    pub config_file: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("model"),
            model_file: "model.onnx".to_string(),
            labels_file: "labels_food101.json".to_string(),
            config_file: "config.json".to_string(),
        }
    }
}

impl ModelConfig {
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(&self.model_file)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.model_dir.join(&self.labels_file)
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join(&self.config_file)
    }
}

#[derive(Clone, Debug, Default)]
pub struct NutritionConfig {
    /// JSON file replacing the built-in table. `None` keeps the built-in table.
    pub table_path: Option<PathBuf>,
}
