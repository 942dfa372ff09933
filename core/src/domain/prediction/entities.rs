use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    classification::entities::ClassificationResult,
    health_index::value_objects::HealthAssessment, nutrition::entities::NutritionRecord,
    prediction::value_objects::UNKNOWN_FOOD,
};

/// Which terminal branch produced a [`PredictionResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    LowConfidence,
    Unscored,
    Scored,
}

/// Result of `POST /predict-image`.
///
/// `nutrition` and `health_index` are either both set or both null; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PredictionResponse {
    food: String,
    confidence: f64,
    nutrition: Option<NutritionRecord>,
    health_index: Option<f64>,
    health_color: String,
    message: String,
    top5: ClassificationResult,
}

impl PredictionResponse {
    pub fn low_confidence(confidence: f64, color: &str, top5: ClassificationResult) -> Self {
        Self {
            food: UNKNOWN_FOOD.to_string(),
            confidence,
            nutrition: None,
            health_index: None,
            health_color: color.to_string(),
            message: format!(
                "🤔 Hmm, not confident enough ({:.1}%). Try a prepared dish like pizza, burger, pasta, etc.",
                confidence * 100.0
            ),
            top5,
        }
    }

    pub fn unscored(label: &str, confidence: f64, color: &str, top5: ClassificationResult) -> Self {
        Self {
            food: label.to_string(),
            confidence,
            nutrition: None,
            health_index: None,
            health_color: color.to_string(),
            message: format!("No nutrition data yet for '{label}'. Coming soon! 🍽️"),
            top5,
        }
    }

    pub fn scored(
        label: &str,
        confidence: f64,
        nutrition: NutritionRecord,
        assessment: HealthAssessment,
        top5: ClassificationResult,
    ) -> Self {
        Self {
            food: label.to_string(),
            confidence,
            nutrition: Some(nutrition),
            health_index: Some(assessment.score),
            health_color: assessment.color,
            message: assessment.message,
            top5,
        }
    }

    pub fn outcome(&self) -> PredictionOutcome {
        match (&self.nutrition, self.food.as_str()) {
            (Some(_), _) => PredictionOutcome::Scored,
            (None, UNKNOWN_FOOD) => PredictionOutcome::LowConfidence,
            (None, _) => PredictionOutcome::Unscored,
        }
    }

    pub fn food(&self) -> &str {
        &self.food
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn nutrition(&self) -> Option<&NutritionRecord> {
        self.nutrition.as_ref()
    }

    pub fn health_index(&self) -> Option<f64> {
        self.health_index
    }

    pub fn health_color(&self) -> &str {
        &self.health_color
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn top5(&self) -> &ClassificationResult {
        &self.top5
    }
}
