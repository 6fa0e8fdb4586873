use std::path::PathBuf;

use thiserror::Error;

use crate::Dimension;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("dimension {dimension} lists {weights} weights for {questions} questions")]
    WeightCountMismatch {
        dimension: Dimension,
        questions: usize,
        weights: usize,
    },

    #[error("dimension {dimension} has weight {weight} at position {index}; expected +1 or -1")]
    InvalidWeight {
        dimension: Dimension,
        index: usize,
        weight: i8,
    },

    #[error("dimension {dimension} contains question id 0; ids start at 1")]
    InvalidQuestionId { dimension: Dimension },

    #[error("question {question_id} appears more than once in the bank")]
    DuplicateQuestion { question_id: u32 },

    #[error("consistency pair references unknown question {question_id}")]
    UnknownPairQuestion { question_id: u32 },
}
