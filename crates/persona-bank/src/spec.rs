use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BankError, Dimension};

/// Question ids of one dimension and the signed weight of each.
///
/// `weights` runs parallel to `questions`. A missing trailing weight counts
/// as `+1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub questions: Vec<u32>,
    #[serde(default)]
    pub weights: Vec<i8>,
}

impl DimensionSpec {
    pub fn new(questions: Vec<u32>, weights: Vec<i8>) -> Self {
        Self { questions, weights }
    }

    pub fn weight(&self, index: usize) -> i8 {
        self.weights.get(index).copied().unwrap_or(1)
    }

    /// `(question_id, weight)` pairs in configuration order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, i8)> + '_ {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, &question_id)| (question_id, self.weight(index)))
    }

    pub fn weight_sum(&self) -> i32 {
        self.entries().map(|(_, weight)| i32::from(weight)).sum()
    }

    fn validate(&self, dimension: Dimension) -> Result<(), BankError> {
        if self.weights.len() > self.questions.len() {
            return Err(BankError::WeightCountMismatch {
                dimension,
                questions: self.questions.len(),
                weights: self.weights.len(),
            });
        }
        if self.questions.contains(&0) {
            return Err(BankError::InvalidQuestionId { dimension });
        }
        if let Some((index, &weight)) = self
            .weights
            .iter()
            .enumerate()
            .find(|(_, weight)| weight.unsigned_abs() != 1)
        {
            return Err(BankError::InvalidWeight {
                dimension,
                index,
                weight,
            });
        }
        Ok(())
    }
}

/// Two questions a consistent respondent is expected to answer alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyPair(pub u32, pub u32);

/// One spec per dimension, keyed by the bank-file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDimensions {
    #[serde(rename = "E_I")]
    pub extraversion: DimensionSpec,
    #[serde(rename = "S_N")]
    pub intuition: DimensionSpec,
    #[serde(rename = "T_F")]
    pub feeling: DimensionSpec,
    #[serde(rename = "J_P")]
    pub judging: DimensionSpec,
    #[serde(rename = "A_T")]
    pub assertive: DimensionSpec,
}

/// A fixed, versioned question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub name: String,
    #[serde(default)]
    pub consistency_pairs: Vec<ConsistencyPair>,
    pub dimensions: BankDimensions,
}

impl QuestionBank {
    pub fn spec(&self, dimension: Dimension) -> &DimensionSpec {
        match dimension {
            Dimension::Extraversion => &self.dimensions.extraversion,
            Dimension::Intuition => &self.dimensions.intuition,
            Dimension::Feeling => &self.dimensions.feeling,
            Dimension::Judging => &self.dimensions.judging,
            Dimension::Assertive => &self.dimensions.assertive,
        }
    }

    /// The dimension a question belongs to, if any.
    pub fn dimension_of(&self, question_id: u32) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|&dimension| self.spec(dimension).questions.contains(&question_id))
    }

    pub fn question_count(&self) -> usize {
        Dimension::ALL
            .iter()
            .map(|&dimension| self.spec(dimension).questions.len())
            .sum()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = toml::from_str(source)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_toml_str(&source)?;
        tracing::info!(
            target: "persona_bank",
            path = %path.display(),
            name = %bank.name,
            questions = bank.question_count(),
            "loaded question bank"
        );
        Ok(bank)
    }

    /// Structural checks. A non-positive weight sum is reported but accepted:
    /// scoring divides by that sum as is.
    pub fn validate(&self) -> Result<(), BankError> {
        let mut seen = BTreeSet::new();
        for dimension in Dimension::ALL {
            let spec = self.spec(dimension);
            spec.validate(dimension)?;
            for &question_id in &spec.questions {
                if !seen.insert(question_id) {
                    return Err(BankError::DuplicateQuestion { question_id });
                }
            }
            let weight_sum = spec.weight_sum();
            if !spec.questions.is_empty() && weight_sum <= 0 {
                tracing::warn!(
                    target: "persona_bank",
                    dimension = %dimension,
                    weight_sum,
                    "weights sum to a non-positive value; complete answers score neutral or inverted"
                );
            }
        }

        for pair in &self.consistency_pairs {
            for question_id in [pair.0, pair.1] {
                if !seen.contains(&question_id) {
                    return Err(BankError::UnknownPairQuestion { question_id });
                }
            }
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
