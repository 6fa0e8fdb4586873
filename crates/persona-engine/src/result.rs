use serde::{Deserialize, Serialize};

use crate::anomaly::Anomaly;
use crate::classifier::TypeCode;
use crate::dimension::DimensionScores;

/// Outcome of one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityResult {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub scores: DimensionScores,
    pub confidence: f64,
    pub consistency: f64,
    pub anomalies: Vec<Anomaly>,
}

impl PersonalityResult {
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}
