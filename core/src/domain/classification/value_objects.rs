use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Maps a raw classifier label onto the nutrition table key space.
///
/// `"Apple Pie"` becomes `"apple_pie"`. Both sides of the lookup depend on this
/// rule, so every label entering the system goes through it.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

/// Class index to label, parsed from the `id2label` object of the label file.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMapping {
    labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LabelFile {
    id2label: HashMap<String, String>,
}

impl LabelMapping {
    pub fn new(raw_labels: Vec<String>) -> Self {
        Self {
            labels: raw_labels.iter().map(|l| normalize_label(l)).collect(),
        }
    }

    /// Parses `{"id2label": {"0": "apple_pie", ...}, "label2id": {...}}`.
    ///
    /// Ids must be integers forming the contiguous range `0..n`.
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let file: LabelFile = serde_json::from_str(content).map_err(|e| {
            CoreError::InvalidModelArtifact(format!("malformed label mapping: {e}"))
        })?;

        if file.id2label.is_empty() {
            return Err(CoreError::InvalidModelArtifact(
                "label mapping contains no classes".to_string(),
            ));
        }

        let mut indexed = file
            .id2label
            .into_iter()
            .map(|(id, label)| {
                id.trim()
                    .parse::<usize>()
                    .map(|id| (id, label))
                    .map_err(|_| {
                        CoreError::InvalidModelArtifact(format!("class id '{id}' is not an integer"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        indexed.sort_by_key(|(id, _)| *id);

        for (expected, (id, _)) in indexed.iter().enumerate() {
            if *id != expected {
                return Err(CoreError::InvalidModelArtifact(format!(
                    "class ids must be contiguous from 0, missing id {expected}"
                )));
            }
        }

        Ok(Self::new(indexed.into_iter().map(|(_, label)| label).collect()))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Training summary written next to the model weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelMetadata {
    pub model_type: Option<String>,
    pub num_classes: Option<usize>,
    pub best_accuracy: Option<f64>,
}

impl ModelMetadata {
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        serde_json::from_str(content)
            .map_err(|e| CoreError::InvalidModelArtifact(format!("malformed model config: {e}")))
    }

    /// Checks the declared class count against the label mapping.
    pub fn ensure_matches(&self, mapping: &LabelMapping) -> Result<(), CoreError> {
        match self.num_classes {
            Some(declared) if declared != mapping.len() => {
                Err(CoreError::InvalidModelArtifact(format!(
                    "model config declares {declared} classes but the label mapping has {}",
                    mapping.len()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierInfo {
    pub labels: Vec<String>,
    pub metadata: ModelMetadata,
    pub input_size: u32,
}
