use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest value on the agreement scale (strong disagreement).
pub const MIN_VALUE: i8 = -3;
/// Highest value on the agreement scale (strong agreement).
pub const MAX_VALUE: i8 = 3;

/// One respondent's reaction to one question of the bank.
///
/// `value` is expected in `MIN_VALUE..=MAX_VALUE`; callers validate it before
/// handing answers to the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub value: i8,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: u32, value: i8, answered_at: DateTime<Utc>) -> Self {
        Self {
            question_id,
            value,
            answered_at,
        }
    }

    pub fn in_range(&self) -> bool {
        (MIN_VALUE..=MAX_VALUE).contains(&self.value)
    }

    pub fn is_extreme(&self) -> bool {
        self.value.unsigned_abs() == MAX_VALUE.unsigned_abs()
    }

    pub fn is_neutral(&self) -> bool {
        self.value == 0
    }
}

/// First answer recorded for `question_id`, in collection order.
pub fn find_answer(answers: &[Answer], question_id: u32) -> Option<&Answer> {
    answers.iter().find(|answer| answer.question_id == question_id)
}
