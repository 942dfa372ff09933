use std::path::Path;

use tract_onnx::prelude::*;

use crate::domain::{
    classification::ports::InferenceModel, common::entities::app_errors::CoreError,
    image::value_objects::ImageTensor,
};

/// ONNX classifier graph, optimized once for a fixed `(1, 3, size, size)` input.
pub struct OnnxInferenceModel {
    plan: TypedRunnableModel<TypedModel>,
    input_size: usize,
}

impl OnnxInferenceModel {
    pub fn load(path: &Path, input_size: u32) -> Result<Self, CoreError> {
        if !path.is_file() {
            return Err(CoreError::DependencyMissing(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let input_size = input_size as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, 3, input_size, input_size]).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                CoreError::InvalidModelArtifact(format!(
                    "failed to load ONNX model {}: {e:#}",
                    path.display()
                ))
            })?;

        Ok(Self { plan, input_size })
    }
}

impl InferenceModel for OnnxInferenceModel {
    fn infer(&self, input: &ImageTensor) -> Result<Vec<f32>, CoreError> {
        let [batch, channels, height, width] = input.shape();
        if [batch, channels, height, width] != [1, 3, self.input_size, self.input_size] {
            return Err(CoreError::InferenceFailed(format!(
                "expected input shape [1, 3, {size}, {size}], got {got:?}",
                size = self.input_size,
                got = input.shape()
            )));
        }

        let tensor = Tensor::from_shape::<f32>(&[batch, channels, height, width], &input.to_vec())
            .map_err(|e| CoreError::InferenceFailed(format!("failed to build input tensor: {e:#}")))?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| CoreError::InferenceFailed(format!("{e:#}")))?;

        let logits = outputs
            .first()
            .ok_or_else(|| CoreError::InferenceFailed("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| CoreError::InferenceFailed(format!("unexpected output tensor: {e:#}")))?;

        Ok(logits.iter().copied().collect())
    }
}
