use crate::domain::classification::entities::DEFAULT_TOP_K;

pub const UNKNOWN_FOOD: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    /// Top-1 probabilities below this are reported as `Unknown`. Inclusive: a score
    /// equal to the threshold passes. Default `0.50`.
    pub confidence_threshold: f64,
    /// Number of ranked labels returned with every prediction. Default `5`.
    pub top_k: usize,
    /// Color of the low-confidence branch. Default `#999999`.
    pub unknown_color: String,
    /// Color of recognized labels without nutrition data. Default `#4B7BEC`.
    pub unscored_color: String,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.50,
            top_k: DEFAULT_TOP_K,
            unknown_color: "#999999".to_string(),
            unscored_color: "#4B7BEC".to_string(),
        }
    }
}
