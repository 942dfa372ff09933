use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "Food Health Classifier";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelStatus {
    pub model_type: Option<String>,
    pub num_classes: usize,
    /// Test accuracy reported by the training run, in percent.
    pub best_accuracy: Option<f64>,
    pub input_size: u32,
    pub nutrition_entries: usize,
    /// Classifier labels that have a nutrition record.
    pub scored_classes: usize,
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodClass {
    pub label: String,
    pub has_nutrition: bool,
}
