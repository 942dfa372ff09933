use crate::domain::{
    classification::{entities::ClassificationResult, value_objects::ClassifierInfo},
    common::entities::app_errors::CoreError,
    image::value_objects::ImageTensor,
};

/// Pretrained network treated as an opaque capability: tensor in, one logit per class out.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceModel: Send + Sync + 'static {
    fn infer(&self, input: &ImageTensor) -> Result<Vec<f32>, CoreError>;
}

/// Ranked, label-normalized classification of a preprocessed image.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync + 'static {
    fn classify(&self, input: &ImageTensor) -> Result<ClassificationResult, CoreError>;

    fn describe(&self) -> ClassifierInfo;
}
