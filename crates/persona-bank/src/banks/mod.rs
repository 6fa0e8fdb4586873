pub mod standard_60;

use crate::QuestionBank;

pub const DEFAULT_BANK: &str = standard_60::NAME;

/// Built-in bank by name.
pub fn by_name(name: &str) -> Option<QuestionBank> {
    match name {
        standard_60::NAME => Some(standard_60::bank()),
        _ => None,
    }
}
