use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationEntry {
    pub label: String,
    /// Softmax probability rounded to 4 decimals.
    pub score: f64,
}

impl ClassificationEntry {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Ranked labels, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ClassificationResult(Vec<ClassificationEntry>);

impl ClassificationResult {
    /// Sorts entries by descending score and keeps at most `top_k`.
    pub fn from_entries(mut entries: Vec<ClassificationEntry>, top_k: usize) -> Self {
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(top_k);
        Self(entries)
    }

    /// Builds the ranked result from per-class probabilities aligned with `labels`.
    pub fn from_probabilities(probabilities: &[f32], labels: &[String], top_k: usize) -> Self {
        let mut ranked: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let entries = ranked
            .into_iter()
            .take(top_k)
            .filter_map(|(idx, probability)| {
                labels
                    .get(idx)
                    .map(|label| ClassificationEntry::new(label.clone(), round_score(probability)))
            })
            .collect();

        Self(entries)
    }

    pub fn top(&self) -> Option<&ClassificationEntry> {
        self.0.first()
    }

    pub fn entries(&self) -> &[ClassificationEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn round_score(probability: f32) -> f64 {
    (f64::from(probability) * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_probabilities_ranks_and_truncates() {
        let labels = labels(&["a", "b", "c", "d", "e", "f", "g"]);
        let probabilities = [0.05, 0.4, 0.1, 0.2, 0.01, 0.04, 0.2];

        let result = ClassificationResult::from_probabilities(&probabilities, &labels, 5);

        assert_eq!(result.len(), 5);
        let ranked: Vec<&str> = result.entries().iter().map(|e| e.label.as_str()).collect();
        // ties keep class order
        assert_eq!(ranked, vec!["b", "d", "g", "c", "a"]);
        assert!(
            result
                .entries()
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
    }

    #[test]
    fn test_scores_rounded_to_four_decimals() {
        let labels = labels(&["waffles", "pancakes"]);
        let result = ClassificationResult::from_probabilities(&[0.923_456_7, 0.076_543_3], &labels, 5);

        assert_eq!(result.top().unwrap().score, 0.9235);
        assert_eq!(result.entries()[1].score, 0.0765);
    }

    #[test]
    fn test_fewer_classes_than_top_k() {
        let labels = labels(&["sushi", "sashimi"]);
        let result = ClassificationResult::from_probabilities(&[0.3, 0.7], &labels, 5);
        assert_eq!(result.len(), 2);
        assert_eq!(result.top().unwrap().label, "sashimi");
    }

    #[test]
    fn test_from_entries_sorts_descending() {
        let result = ClassificationResult::from_entries(
            vec![
                ClassificationEntry::new("ramen", 0.1),
                ClassificationEntry::new("pho", 0.8),
            ],
            DEFAULT_TOP_K,
        );
        assert_eq!(result.top().unwrap().label, "pho");
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let result = ClassificationResult::from_entries(
            vec![ClassificationEntry::new("pizza", 0.9)],
            DEFAULT_TOP_K,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!([{"label": "pizza", "score": 0.9}]));
    }
}
