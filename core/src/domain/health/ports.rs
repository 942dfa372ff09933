use crate::domain::health::entities::{FoodClass, ModelStatus};

/// Read-only introspection of the loaded classifier and nutrition table.
pub trait ModelStatusService: Send + Sync {
    fn model_status(&self) -> ModelStatus;

    /// Every classifier label, sorted alphabetically.
    fn list_classes(&self) -> Vec<FoodClass>;
}
