use persona_bank::Dimension;

use crate::dimension::{DimensionScores, NEUTRAL_SCORE};

/// Multiplier applied to the mean distance so moderate answers still register.
pub const DEFAULT_AMPLIFICATION: f64 = 1.2;

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScorer {
    amplification: f64,
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_AMPLIFICATION)
    }
}

impl ConfidenceScorer {
    pub fn new(amplification: f64) -> Self {
        Self { amplification }
    }

    pub fn amplification(&self) -> f64 {
        self.amplification
    }

    /// Mean distance of the five scores from the midpoint, amplified and
    /// clamped to `[0, 1]`. All-neutral scores give 0.
    pub fn score(&self, scores: &DimensionScores) -> f64 {
        let total: f64 = scores
            .iter()
            .map(|(_, score)| (score - NEUTRAL_SCORE).abs() / NEUTRAL_SCORE)
            .sum();
        let mean = total / Dimension::ALL.len() as f64;
        (mean * self.amplification).clamp(0.0, 1.0)
    }
}
