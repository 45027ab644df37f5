//! Evaluation descriptors attached to fixture tasks.
//!
//! Each task carries named metrics with a weight and a pass threshold plus a
//! total-score ceiling. The demo never evaluates submissions against these;
//! they exist so the wizard can display the rubric, and `weighted_score`
//! computes the aggregate a real evaluator would produce.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named evaluation metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    name: String,
    weight: f64,
    threshold: f64,
}

impl Metric {
    /// Creates a new metric.
    pub fn new(name: impl Into<String>, weight: f64, threshold: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            threshold,
        }
    }

    /// Returns the metric name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the metric weight (fraction of the total score).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the pass threshold (0.0 to 1.0).
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Scoring rubric for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriteria {
    metrics: Vec<Metric>,
    total_score: u32,
}

impl EvaluationCriteria {
    /// Creates a rubric from metrics and a total-score ceiling.
    pub fn new(metrics: Vec<Metric>, total_score: u32) -> Self {
        Self {
            metrics,
            total_score,
        }
    }

    /// Returns the metrics in fixture order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Returns the total-score ceiling.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Computes the weight-normalized score for observed metric values.
    ///
    /// Observed values are fractions in [0.0, 1.0] keyed by metric name;
    /// missing metrics count as zero. The result is rounded and bounded by
    /// the total-score ceiling.
    pub fn weighted_score(&self, observed: &HashMap<String, f64>) -> u32 {
        let mut weighted = 0.0;
        let mut total_weight = 0.0;

        for metric in &self.metrics {
            let value = observed.get(metric.name()).copied().unwrap_or(0.0);
            weighted += value * metric.weight();
            total_weight += metric.weight();
        }

        if total_weight == 0.0 {
            return 0;
        }

        let score = (weighted / total_weight * self.total_score as f64).round() as u32;
        score.min(self.total_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> EvaluationCriteria {
        EvaluationCriteria::new(
            vec![
                Metric::new("correctness", 0.5, 0.8),
                Metric::new("efficiency", 0.3, 0.7),
                Metric::new("code-quality", 0.2, 0.6),
            ],
            100,
        )
    }

    #[test]
    fn weighted_score_of_perfect_metrics_hits_the_ceiling() {
        let observed = HashMap::from([
            ("correctness".to_string(), 1.0),
            ("efficiency".to_string(), 1.0),
            ("code-quality".to_string(), 1.0),
        ]);
        assert_eq!(rubric().weighted_score(&observed), 100);
    }

    #[test]
    fn weighted_score_treats_missing_metrics_as_zero() {
        let observed = HashMap::from([("correctness".to_string(), 1.0)]);
        assert_eq!(rubric().weighted_score(&observed), 50);
    }

    #[test]
    fn weighted_score_of_empty_rubric_is_zero() {
        let empty = EvaluationCriteria::new(vec![], 100);
        assert_eq!(empty.weighted_score(&HashMap::new()), 0);
    }

    #[test]
    fn weighted_score_never_exceeds_the_ceiling() {
        // Observed values above 1.0 are not meaningful but must not
        // produce a score above the ceiling.
        let observed = HashMap::from([
            ("correctness".to_string(), 2.0),
            ("efficiency".to_string(), 2.0),
            ("code-quality".to_string(), 2.0),
        ]);
        assert_eq!(rubric().weighted_score(&observed), 100);
    }
}
