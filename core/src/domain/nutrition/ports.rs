use crate::domain::nutrition::entities::NutritionRecord;

/// Read-only lookup from normalized food label to nutrition values.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync + 'static {
    fn get_by_label(&self, label: &str) -> Option<NutritionRecord>;

    fn contains(&self, label: &str) -> bool {
        self.get_by_label(label).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
