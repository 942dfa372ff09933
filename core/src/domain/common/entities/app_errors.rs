use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Missing dependency: {0}")]
    DependencyMissing(String),

    #[error("Invalid model artifact: {0}")]
    InvalidModelArtifact(String),

    #[error("Invalid nutrition data: {0}")]
    InvalidNutritionData(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Errors that must abort process start instead of failing a single request.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::DependencyMissing(_)
                | CoreError::InvalidModelArtifact(_)
                | CoreError::InvalidNutritionData(_)
        )
    }
}
