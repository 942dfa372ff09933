use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weights and thresholds of the health index heuristic.
///
/// The score is
/// `base + protein_weight * protein_g - fat_weight * fat_g - sugar_weight * sugar_g
///  - calorie_weight * max(0, calories - calorie_baseline)`,
/// clamped to `[min_score, max_score]` and rounded to one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthIndexConfig {
    /// Starting score before any adjustment. Default `5.0`.
    pub base: f64,
    /// Reward per gram of protein. Default `0.02`.
    pub protein_weight: f64,
    /// Penalty per gram of fat. Default `0.015`.
    pub fat_weight: f64,
    /// Penalty per gram of sugar. Default `0.01`.
    pub sugar_weight: f64,
    /// Penalty per kcal above `calorie_baseline`. Default `0.004`.
    pub calorie_weight: f64,
    /// Calories up to this value are not penalized. Default `250.0`.
    pub calorie_baseline: f64,
    /// Default `0.0`.
    pub min_score: f64,
    /// Default `10.0`.
    pub max_score: f64,
    /// Rounded scores at or above this are green. Default `7.5`.
    pub green_threshold: f64,
    /// Rounded scores at or above this (and below green) are yellow. Default `5.0`.
    pub yellow_threshold: f64,
}

impl Default for HealthIndexConfig {
    fn default() -> Self {
        Self {
            base: 5.0,
            protein_weight: 0.02,
            fat_weight: 0.015,
            sugar_weight: 0.01,
            calorie_weight: 0.004,
            calorie_baseline: 250.0,
            min_score: 0.0,
            max_score: 10.0,
            green_threshold: 7.5,
            yellow_threshold: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Green,
    Yellow,
    Red,
}

impl HealthTier {
    pub fn color(&self) -> &'static str {
        match self {
            HealthTier::Green => "#2ecc71",
            HealthTier::Yellow => "#f1c40f",
            HealthTier::Red => "#e74c3c",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthTier::Green => "Great choice! 🥗",
            HealthTier::Yellow => "Decent choice, balance it ⚖️",
            HealthTier::Red => "High calorie/sugar/fat — enjoy in moderation 🍕",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthAssessment {
    /// 0..10, one decimal.
    pub score: f64,
    pub tier: HealthTier,
    pub color: String,
    pub message: String,
}
