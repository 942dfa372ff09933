use std::sync::Arc;

use crate::domain::{
    classification::{
        entities::{ClassificationResult, DEFAULT_TOP_K},
        ports::{ImageClassifier, InferenceModel},
        value_objects::{ClassifierInfo, LabelMapping, ModelMetadata},
    },
    common::entities::app_errors::CoreError,
    image::value_objects::ImageTensor,
};

/// Numerically stable softmax.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; logits.len()];
    }

    exps.into_iter().map(|e| e / sum).collect()
}

pub struct ClassifierAdapter {
    model: Arc<dyn InferenceModel>,
    labels: LabelMapping,
    metadata: ModelMetadata,
    top_k: usize,
    input_size: u32,
}

impl ClassifierAdapter {
    /// `top_k` is clamped to `1..=DEFAULT_TOP_K`.
    pub fn new(
        model: Arc<dyn InferenceModel>,
        labels: LabelMapping,
        metadata: ModelMetadata,
        top_k: usize,
        input_size: u32,
    ) -> Self {
        Self {
            model,
            labels,
            metadata,
            top_k: top_k.clamp(1, DEFAULT_TOP_K),
            input_size,
        }
    }
}

impl ImageClassifier for ClassifierAdapter {
    fn classify(&self, input: &ImageTensor) -> Result<ClassificationResult, CoreError> {
        let logits = self.model.infer(input)?;

        if logits.len() != self.labels.len() {
            tracing::error!(
                "Model returned {} logits for {} labels",
                logits.len(),
                self.labels.len()
            );
            return Err(CoreError::InferenceFailed(format!(
                "model returned {} logits but {} labels are configured",
                logits.len(),
                self.labels.len()
            )));
        }

        let probabilities = softmax(&logits);
        let result =
            ClassificationResult::from_probabilities(&probabilities, self.labels.labels(), self.top_k);

        tracing::debug!("top-{} classification: {:?}", self.top_k, result);

        Ok(result)
    }

    fn describe(&self) -> ClassifierInfo {
        ClassifierInfo {
            labels: self.labels.labels().to_vec(),
            metadata: self.metadata.clone(),
            input_size: self.input_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array4;

    use super::*;
    use crate::domain::classification::ports::MockInferenceModel;

    fn tensor() -> ImageTensor {
        ImageTensor::new(Array4::zeros((1, 3, 224, 224)))
    }

    fn adapter(model: MockInferenceModel, labels: &[&str]) -> ClassifierAdapter {
        ClassifierAdapter::new(
            Arc::new(model),
            LabelMapping::new(labels.iter().map(|s| s.to_string()).collect()),
            ModelMetadata::default(),
            DEFAULT_TOP_K,
            224,
        )
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probabilities = softmax(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f32 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probabilities.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_softmax_handles_large_logits() {
        let probabilities = softmax(&[1000.0, 1000.0]);
        assert!((probabilities[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_classify_returns_top_five_normalized_labels() {
        let mut model = MockInferenceModel::new();
        model
            .expect_infer()
            .times(1)
            .returning(|_| Ok(vec![0.1, 5.0, 0.3, 0.2, 2.0, 1.0, 0.0]));

        let classifier = adapter(
            model,
            &["Apple Pie", "Waffles", "Hot Dog", "Pho", "French Fries", "Sushi", "Ramen"],
        );

        let result = classifier.classify(&tensor()).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.top().unwrap().label, "waffles");
        assert_eq!(result.entries()[1].label, "french_fries");
        let total: f64 = result.entries().iter().map(|e| e.score).sum();
        assert!(total <= 1.0 + 1e-4);
        assert!(
            result
                .entries()
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
    }

    #[test]
    fn test_top_k_never_exceeds_five() {
        let mut model = MockInferenceModel::new();
        model.expect_infer().returning(|_| Ok(vec![0.0; 8]));
        let labels: Vec<String> = (0..8).map(|i| format!("dish_{i}")).collect();

        let wide = ClassifierAdapter::new(
            Arc::new(model),
            LabelMapping::new(labels),
            ModelMetadata::default(),
            10,
            224,
        );

        assert_eq!(wide.classify(&tensor()).unwrap().len(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_classify_rejects_logit_count_mismatch() {
        let mut model = MockInferenceModel::new();
        model.expect_infer().returning(|_| Ok(vec![0.5, 0.5]));

        let classifier = adapter(model, &["pizza", "sushi", "ramen"]);

        assert!(matches!(
            classifier.classify(&tensor()),
            Err(CoreError::InferenceFailed(_))
        ));
    }

    #[test]
    fn test_classify_propagates_model_errors() {
        let mut model = MockInferenceModel::new();
        model
            .expect_infer()
            .returning(|_| Err(CoreError::InferenceFailed("boom".to_string())));

        let classifier = adapter(model, &["pizza"]);
        assert!(classifier.classify(&tensor()).is_err());
    }

    #[test]
    fn test_describe_exposes_labels() {
        let classifier = adapter(MockInferenceModel::new(), &["Club Sandwich"]);
        let info = classifier.describe();
        assert_eq!(info.labels, vec!["club_sandwich".to_string()]);
        assert_eq!(info.input_size, 224);
    }
}
