use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, prediction::entities::PredictionResponse,
};

/// Service trait for the image prediction pipeline
pub trait PredictionService: Send + Sync {
    fn predict_image(
        &self,
        image_bytes: Vec<u8>,
    ) -> impl Future<Output = Result<PredictionResponse, CoreError>> + Send;
}
