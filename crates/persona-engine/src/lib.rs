//! Questionnaire scoring: answers in, personality type with confidence,
//! consistency and anomaly signals out.
//!
//! Every step is a pure function of its input. [`ScoringEngine`] wires them
//! together over a [`QuestionBank`](persona_bank::QuestionBank).

pub mod anomaly;
pub mod classifier;
pub mod confidence;
pub mod config;
pub mod consistency;
pub mod dimension;
pub mod engine;
pub mod result;
pub mod validation;

pub use anomaly::{detect_anomalies, Anomaly, AnomalyThresholds};
pub use classifier::{classify, Identity, TypeCode, TypeCodeError};
pub use confidence::ConfidenceScorer;
pub use config::{ConfigError, ScoringConfig};
pub use consistency::check_consistency;
pub use dimension::{score_all, score_dimension, DimensionScores, NEUTRAL_SCORE};
pub use engine::{calculate_result, ScoringEngine};
pub use result::PersonalityResult;
pub use validation::{validate_answers, violations, ValidationError};
