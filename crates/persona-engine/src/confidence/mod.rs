pub mod scorer;

pub use scorer::{ConfidenceScorer, DEFAULT_AMPLIFICATION};
