use crate::domain::{
    classification::ports::ImageClassifier,
    common::services::Service,
    health::{
        entities::{FoodClass, ModelStatus},
        ports::ModelStatusService,
    },
    image::ports::ImagePreprocessor,
    nutrition::ports::NutritionRepository,
};

impl<P, C, N> ModelStatusService for Service<P, C, N>
where
    P: ImagePreprocessor,
    C: ImageClassifier,
    N: NutritionRepository,
{
    fn model_status(&self) -> ModelStatus {
        let info = self.classifier.describe();
        let scored_classes = info
            .labels
            .iter()
            .filter(|label| self.nutrition_repository.contains(label))
            .count();

        ModelStatus {
            model_type: info.metadata.model_type,
            num_classes: info.labels.len(),
            best_accuracy: info.metadata.best_accuracy,
            input_size: info.input_size,
            nutrition_entries: self.nutrition_repository.len(),
            scored_classes,
            confidence_threshold: self.prediction_config.confidence_threshold,
        }
    }

    fn list_classes(&self) -> Vec<FoodClass> {
        let mut classes: Vec<FoodClass> = self
            .classifier
            .describe()
            .labels
            .into_iter()
            .map(|label| FoodClass {
                has_nutrition: self.nutrition_repository.contains(&label),
                label,
            })
            .collect();

        classes.sort_by(|a, b| a.label.cmp(&b.label));
        classes
    }
}
