use std::collections::HashSet;

use persona_bank::{Answer, QuestionBank};
use thiserror::Error;

/// Caller contract violations. The scoring steps themselves never check these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("answer to question {question_id} has value {value}; expected -3..=3")]
    ValueOutOfRange { question_id: u32, value: i8 },

    #[error("question {question_id} is not part of the bank")]
    UnknownQuestion { question_id: u32 },

    #[error("question {question_id} is answered more than once")]
    DuplicateAnswer { question_id: u32 },
}

/// First contract violation in collection order, if any.
pub fn validate_answers(answers: &[Answer], bank: &QuestionBank) -> Result<(), ValidationError> {
    match violations(answers, bank).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Every contract violation in collection order.
pub fn violations(answers: &[Answer], bank: &QuestionBank) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for answer in answers {
        let question_id = answer.question_id;
        if !answer.in_range() {
            errors.push(ValidationError::ValueOutOfRange {
                question_id,
                value: answer.value,
            });
        }
        if bank.dimension_of(question_id).is_none() {
            errors.push(ValidationError::UnknownQuestion { question_id });
        }
        if !seen.insert(question_id) {
            errors.push(ValidationError::DuplicateAnswer { question_id });
        }
    }
    errors
}
