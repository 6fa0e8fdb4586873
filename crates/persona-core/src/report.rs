use std::fmt;

use persona_bank::{Dimension, QuestionBank};
use persona_engine::PersonalityResult;

/// Text rendering of one scored submission.
pub struct ResultReport<'a> {
    pub result: &'a PersonalityResult,
    pub bank: &'a QuestionBank,
    pub answered: usize,
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(
            f,
            "Type:        {} ({})",
            result.type_code,
            result.type_code.role()
        )?;
        writeln!(f, "Bank:        {} ({} answers)", self.bank.name, self.answered)?;
        writeln!(f, "Scores:")?;
        for (dimension, score) in result.scores.iter() {
            writeln!(
                f,
                "  {:<14} {:>5.1}  {}/{}",
                dimension.name(),
                score,
                dimension.high_pole(),
                dimension.low_pole()
            )?;
        }
        writeln!(f, "Confidence:  {:.2}", result.confidence)?;
        writeln!(f, "Consistency: {:.2}", result.consistency)?;
        if result.anomalies.is_empty() {
            writeln!(f, "Anomalies:   none")
        } else {
            let tags: Vec<&str> = result.anomalies.iter().map(|a| a.tag()).collect();
            writeln!(f, "Anomalies:   {}", tags.join(", "))
        }
    }
}

/// Bank layout with per-dimension weight sums.
pub struct BankReport<'a>(pub &'a QuestionBank);

impl fmt::Display for BankReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bank = self.0;
        writeln!(f, "{} ({} questions)", bank.name, bank.question_count())?;
        for dimension in Dimension::ALL {
            let spec = bank.spec(dimension);
            let questions: Vec<String> = spec.questions.iter().map(u32::to_string).collect();
            writeln!(
                f,
                "  {} {:<13} weight sum {:>3}  questions {}",
                dimension.bank_key(),
                dimension.name(),
                spec.weight_sum(),
                questions.join(",")
            )?;
        }
        let pairs: Vec<String> = bank
            .consistency_pairs
            .iter()
            .map(|pair| format!("{}~{}", pair.0, pair.1))
            .collect();
        writeln!(f, "  consistency pairs {}", pairs.join(" "))
    }
}
