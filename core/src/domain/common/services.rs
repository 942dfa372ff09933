use std::sync::Arc;

use crate::domain::{
    classification::ports::ImageClassifier, health_index::value_objects::HealthIndexConfig,
    image::ports::ImagePreprocessor, nutrition::ports::NutritionRepository,
    prediction::value_objects::PredictionConfig,
};

/// Shared, read-only pipeline resources. Cloning only bumps reference counts.
pub struct Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    pub(crate) preprocessor: Arc<P>,
    pub(crate) classifier: Arc<C>,
    pub(crate) nutrition_repository: Arc<N>,
    pub(crate) prediction_config: PredictionConfig,
    pub(crate) health_index_config: HealthIndexConfig,
}

impl<P, C, N> Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    pub fn new(
        preprocessor: P,
        classifier: C,
        nutrition_repository: N,
        prediction_config: PredictionConfig,
        health_index_config: HealthIndexConfig,
    ) -> Self {
        Self {
            preprocessor: Arc::new(preprocessor),
            classifier: Arc::new(classifier),
            nutrition_repository: Arc::new(nutrition_repository),
            prediction_config,
            health_index_config,
        }
    }
}

impl<P, C, N> Clone for Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    fn clone(&self) -> Self {
        Self {
            preprocessor: Arc::clone(&self.preprocessor),
            classifier: Arc::clone(&self.classifier),
            nutrition_repository: Arc::clone(&self.nutrition_repository),
            prediction_config: self.prediction_config.clone(),
            health_index_config: self.health_index_config.clone(),
        }
    }
}
