use std::{fs, path::Path, sync::Arc};

use crate::domain::{
    classification::{
        services::ClassifierAdapter,
        value_objects::{LabelMapping, ModelMetadata},
    },
    common::{ModelConfig, entities::app_errors::CoreError},
    image::value_objects::PreprocessConfig,
    prediction::value_objects::PredictionConfig,
};
use crate::infrastructure::classifier::onnx_model::OnnxInferenceModel;

pub fn load_label_mapping(path: &Path) -> Result<LabelMapping, CoreError> {
    let content = read_required(path, "label mapping")?;
    LabelMapping::from_json(&content)
}

/// Reads the training config if present. A missing file yields empty metadata.
pub fn load_model_metadata(path: &Path) -> Result<ModelMetadata, CoreError> {
    if !path.is_file() {
        tracing::warn!("Model config {} not found, continuing without metadata", path.display());
        return Ok(ModelMetadata::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        CoreError::InvalidModelArtifact(format!("failed to read {}: {e}", path.display()))
    })?;
    ModelMetadata::from_json(&content)
}

/// Loads labels, metadata and the ONNX graph. Any failure here is fatal to startup.
pub fn load_classifier(
    model: &ModelConfig,
    preprocess: &PreprocessConfig,
    prediction: &PredictionConfig,
) -> Result<ClassifierAdapter, CoreError> {
    let labels = load_label_mapping(&model.labels_path())?;
    let metadata = load_model_metadata(&model.config_path())?;
    metadata.ensure_matches(&labels)?;

    let onnx = OnnxInferenceModel::load(&model.model_path(), preprocess.crop_size)?;

    tracing::info!(
        model = %model.model_path().display(),
        classes = labels.len(),
        model_type = metadata.model_type.as_deref().unwrap_or("unknown"),
        best_accuracy = metadata.best_accuracy,
        "classifier loaded"
    );

    Ok(ClassifierAdapter::new(
        Arc::new(onnx),
        labels,
        metadata,
        prediction.top_k,
        preprocess.crop_size,
    ))
}

fn read_required(path: &Path, what: &str) -> Result<String, CoreError> {
    if !path.is_file() {
        return Err(CoreError::DependencyMissing(format!(
            "{what} not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        CoreError::InvalidModelArtifact(format!("failed to read {}: {e}", path.display()))
    })
}
