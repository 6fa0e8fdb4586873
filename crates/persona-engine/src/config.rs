use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anomaly::AnomalyThresholds;
use crate::confidence::DEFAULT_AMPLIFICATION;

/// Tunable constants of the scoring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_amplification")]
    pub confidence_amplification: f64,

    #[serde(default)]
    pub anomaly: AnomalyThresholds,
}

fn default_amplification() -> f64 {
    DEFAULT_AMPLIFICATION
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_amplification: DEFAULT_AMPLIFICATION,
            anomaly: AnomalyThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number >= 0, got {value}")]
    NotNonNegative { field: &'static str, value: f64 },

    #[error("{field} must be a ratio within 0..=1, got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },
}

impl ScoringConfig {
    /// Rejects values that would push confidence outside `[0, 1]` or make an
    /// anomaly check meaningless. NaN fails every check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("confidence_amplification", self.confidence_amplification)?;
        self.anomaly.validate()
    }
}

impl AnomalyThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ratio("anomaly.extreme_ratio", self.extreme_ratio)?;
        ratio("anomaly.neutral_ratio", self.neutral_ratio)?;
        non_negative("anomaly.min_mean_gap_ms", self.min_mean_gap_ms)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotNonNegative { field, value })
    }
}

fn ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { field, value })
    }
}
