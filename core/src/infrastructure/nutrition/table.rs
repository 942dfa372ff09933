use std::{collections::HashMap, fs, path::Path};

use crate::domain::{
    classification::value_objects::normalize_label,
    common::{NutritionConfig, entities::app_errors::CoreError},
    nutrition::{entities::NutritionRecord, ports::NutritionRepository},
};
use crate::infrastructure::nutrition::catalog::BUILTIN_NUTRITION;

/// Immutable label → nutrition map, built once at startup.
#[derive(Debug, Clone)]
pub struct InMemoryNutritionTable {
    records: HashMap<String, NutritionRecord>,
}

impl InMemoryNutritionTable {
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN_NUTRITION
                .iter()
                .map(|(label, record)| (label.to_string(), *record))
                .collect(),
        }
    }

    /// Parses a JSON object of `label -> {calories, protein_g, fat_g, carbs_g, sugar_g}`.
    /// Keys are normalized; `sugar_g` may be omitted.
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let raw: HashMap<String, NutritionRecord> = serde_json::from_str(content)
            .map_err(|e| CoreError::InvalidNutritionData(format!("malformed nutrition table: {e}")))?;

        let mut records = HashMap::with_capacity(raw.len());
        for (label, record) in raw {
            record
                .validate()
                .map_err(|e| CoreError::InvalidNutritionData(format!("'{label}': {e}")))?;
            records.insert(normalize_label(&label), record);
        }

        Ok(Self { records })
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::DependencyMissing(format!(
                "nutrition table {} unreadable: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn load(config: &NutritionConfig) -> Result<Self, CoreError> {
        let table = match &config.table_path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin(),
        };

        tracing::info!(entries = table.len(), "nutrition table loaded");
        Ok(table)
    }
}

impl NutritionRepository for InMemoryNutritionTable {
    fn get_by_label(&self, label: &str) -> Option<NutritionRecord> {
        self.records.get(label).copied()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_contents() {
        let table = InMemoryNutritionTable::builtin();

        assert_eq!(table.len(), BUILTIN_NUTRITION.len());
        assert_eq!(
            table.get_by_label("pizza"),
            Some(NutritionRecord::new(266.0, 11.0, 10.0, 33.0, 4.0))
        );
        assert!(table.contains("waffles"));
        assert!(!table.contains("unknown_dish"));
    }

    #[test]
    fn test_builtin_records_are_valid_and_normalized() {
        for (label, record) in BUILTIN_NUTRITION {
            assert!(record.validate().is_ok(), "{label} has invalid values");
            assert_eq!(*label, normalize_label(label));
        }
    }

    #[test]
    fn test_from_json_normalizes_keys() {
        let table = InMemoryNutritionTable::from_json(
            r#"{"Greek Salad": {"calories": 106, "protein_g": 3, "fat_g": 8, "carbs_g": 7}}"#,
        )
        .unwrap();

        assert_eq!(
            table.get_by_label("greek_salad"),
            Some(NutritionRecord::new(106.0, 3.0, 8.0, 7.0, 0.0))
        );
    }

    #[test]
    fn test_from_json_rejects_negative_values() {
        let err = InMemoryNutritionTable::from_json(
            r#"{"pho": {"calories": -92, "protein_g": 6, "fat_g": 2, "carbs_g": 13}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidNutritionData(_)));
    }

    #[test]
    fn test_load_prefers_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nutrition.json");
        fs::write(
            &path,
            r#"{"miso_soup": {"calories": 40, "protein_g": 2, "fat_g": 1, "carbs_g": 5, "sugar_g": 1}}"#,
        )
        .unwrap();

        let table = InMemoryNutritionTable::load(&NutritionConfig {
            table_path: Some(path),
        })
        .unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.contains("miso_soup"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = InMemoryNutritionTable::load(&NutritionConfig {
            table_path: Some("does/not/exist.json".into()),
        })
        .unwrap_err();
        assert!(err.is_startup_fatal());
    }
}
