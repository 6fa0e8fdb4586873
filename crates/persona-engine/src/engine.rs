use persona_bank::banks::standard_60;
use persona_bank::{Answer, QuestionBank};

use crate::anomaly::detect_anomalies;
use crate::classifier::classify;
use crate::confidence::ConfidenceScorer;
use crate::config::ScoringConfig;
use crate::consistency::check_consistency;
use crate::dimension::score_all;
use crate::result::PersonalityResult;
use crate::validation::{validate_answers, ValidationError};

/// Scores completed questionnaires against one question bank.
///
/// Holds configuration only; every call is independent.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
    config: ScoringConfig,
    confidence: ConfidenceScorer,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(standard_60::bank(), ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank, config: ScoringConfig) -> Self {
        Self {
            bank,
            confidence: ConfidenceScorer::new(config.confidence_amplification),
            config,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores `answers` as given. Input is trusted; see [`Self::score_checked`].
    pub fn score(&self, answers: &[Answer]) -> PersonalityResult {
        let scores = score_all(answers, &self.bank);
        let type_code = classify(&scores);
        let confidence = self.confidence.score(&scores);
        let consistency = check_consistency(answers, &self.bank.consistency_pairs);
        let anomalies = detect_anomalies(answers, &self.config.anomaly);

        tracing::debug!(
            target: "persona_engine",
            bank = %self.bank.name,
            answers = answers.len(),
            type_code = %type_code,
            confidence,
            consistency,
            anomalies = anomalies.len(),
            "scored submission"
        );

        PersonalityResult {
            type_code,
            scores,
            confidence,
            consistency,
            anomalies,
        }
    }

    /// Rejects contract violations before scoring.
    pub fn score_checked(&self, answers: &[Answer]) -> Result<PersonalityResult, ValidationError> {
        if let Err(error) = validate_answers(answers, &self.bank) {
            tracing::warn!(target: "persona_engine", error = %error, "rejected submission");
            return Err(error);
        }
        Ok(self.score(answers))
    }
}

/// Scores against the built-in bank with default configuration.
pub fn calculate_result(answers: &[Answer]) -> PersonalityResult {
    ScoringEngine::default().score(answers)
}
