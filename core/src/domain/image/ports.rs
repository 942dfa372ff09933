use crate::domain::{common::entities::app_errors::CoreError, image::value_objects::ImageTensor};

/// Turns raw upload bytes into the classifier input tensor.
#[cfg_attr(test, mockall::automock)]
pub trait ImagePreprocessor: Send + Sync + 'static {
    /// Fails with [`CoreError::InvalidImage`] when the bytes are not a decodable image.
    fn preprocess(&self, image_bytes: &[u8]) -> Result<ImageTensor, CoreError>;
}
