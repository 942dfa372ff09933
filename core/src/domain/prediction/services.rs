use std::sync::Arc;

use crate::domain::{
    classification::{entities::ClassificationResult, ports::ImageClassifier},
    common::{entities::app_errors::CoreError, services::Service},
    health_index::services::compute_health_index_with,
    image::ports::ImagePreprocessor,
    nutrition::ports::NutritionRepository,
    prediction::{entities::PredictionResponse, ports::PredictionService},
};

impl<P, C, N> PredictionService for Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    async fn predict_image(&self, image_bytes: Vec<u8>) -> Result<PredictionResponse, CoreError> {
        let preprocessor = Arc::clone(&self.preprocessor);
        let classifier = Arc::clone(&self.classifier);

        // 1-2. Decode, preprocess and classify off the async runtime
        let top5 = tokio::task::spawn_blocking(move || -> Result<ClassificationResult, CoreError> {
            let tensor = preprocessor.preprocess(&image_bytes)?;
            classifier.classify(&tensor)
        })
        .await
        .map_err(|e| {
            tracing::error!("Inference task failed: {}", e);
            CoreError::Internal(format!("inference task failed: {e}"))
        })??;

        Ok(self.resolve(top5))
    }
}

impl<P, C, N> Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    /// Applies the confidence gate and nutrition lookup to a ranked classification.
    pub fn resolve(&self, top5: ClassificationResult) -> PredictionResponse {
        let config = &self.prediction_config;

        let (label, confidence) = match top5.top() {
            Some(entry) => (entry.label.clone(), entry.score),
            None => (String::new(), 0.0),
        };

        // 3. Confidence gate
        if confidence < config.confidence_threshold {
            tracing::info!(
                confidence,
                threshold = config.confidence_threshold,
                "prediction below confidence threshold"
            );
            return PredictionResponse::low_confidence(confidence, &config.unknown_color, top5);
        }

        // 4. Nutrition lookup
        let Some(nutrition) = self.nutrition_repository.get_by_label(&label) else {
            tracing::info!(food = %label, confidence, "no nutrition data for label");
            return PredictionResponse::unscored(&label, confidence, &config.unscored_color, top5);
        };

        // 5. Full result
        let assessment = compute_health_index_with(&nutrition, &self.health_index_config);
        tracing::info!(
            food = %label,
            confidence,
            health_index = assessment.score,
            "prediction scored"
        );

        PredictionResponse::scored(&label, confidence, nutrition, assessment, top5)
    }
}
