use crate::{
    domain::common::{FoodHealthConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        classifier::load_classifier, image::ImageNetPreprocessor,
        nutrition::InMemoryNutritionTable,
    },
};

pub use crate::domain::classification::services::ClassifierAdapter;

pub type FoodHealthService = Service<ImageNetPreprocessor, ClassifierAdapter, InMemoryNutritionTable>;

/// Loads every startup resource. Errors are fatal and should abort the process.
pub fn create_service(config: FoodHealthConfig) -> Result<FoodHealthService, CoreError> {
    let nutrition = InMemoryNutritionTable::load(&config.nutrition)?;
    let classifier = load_classifier(&config.model, &config.preprocess, &config.prediction)?;
    let preprocessor = ImageNetPreprocessor::new(config.preprocess);

    Ok(Service::new(
        preprocessor,
        classifier,
        nutrition,
        config.prediction,
        config.health_index,
    ))
}
