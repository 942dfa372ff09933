use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Nutrition values per 100g serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
}

impl NutritionRecord {
    pub const fn new(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64, sugar_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            fat_g,
            carbs_g,
            sugar_g,
        }
    }

    /// Rejects negative and non-finite values.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("fat_g", self.fat_g),
            ("carbs_g", self.carbs_g),
            ("sugar_g", self.sugar_g),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidNutritionData(format!(
                    "{name} must be a finite number >= 0, got {value}"
                )));
            }
        }

        Ok(())
    }
}
