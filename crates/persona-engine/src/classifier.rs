use std::fmt;
use std::str::FromStr;

use persona_bank::Dimension;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::dimension::{DimensionScores, NEUTRAL_SCORE};

/// The assertive/turbulent identity appended to the four-letter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    Assertive,
    Turbulent,
}

impl Identity {
    pub fn letter(self) -> char {
        match self {
            Identity::Assertive => 'A',
            Identity::Turbulent => 'T',
        }
    }
}

/// A personality type such as `ENFJ-T`.
///
/// `letters` holds one pole letter per primary dimension in E/I, N/S, F/T,
/// J/P order. Codes parsed from bare four-letter strings carry no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode {
    letters: [char; 4],
    identity: Option<Identity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeCodeError {
    #[error("type code {0:?} must look like ENFJ or ENFJ-T")]
    Malformed(String),

    #[error("letter {letter:?} is not a pole of {dimension}")]
    InvalidLetter { dimension: Dimension, letter: char },

    #[error("identity {0:?} must be A or T")]
    InvalidIdentity(char),
}

const PRIMARY: [Dimension; 4] = [
    Dimension::Extraversion,
    Dimension::Intuition,
    Dimension::Feeling,
    Dimension::Judging,
];

fn pole(dimension: Dimension, score: f64) -> char {
    if score >= NEUTRAL_SCORE {
        dimension.high_pole()
    } else {
        dimension.low_pole()
    }
}

/// Threshold classification: a score of exactly 50 picks the high pole.
pub fn classify(scores: &DimensionScores) -> TypeCode {
    let letters = PRIMARY.map(|dimension| pole(dimension, scores.get(dimension)));
    let identity = if scores.assertive >= NEUTRAL_SCORE {
        Identity::Assertive
    } else {
        Identity::Turbulent
    };
    TypeCode {
        letters,
        identity: Some(identity),
    }
}

impl TypeCode {
    pub fn letters(&self) -> [char; 4] {
        self.letters
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity
    }

    /// The four-letter part, e.g. `ENFJ`.
    pub fn base(&self) -> String {
        self.letters.iter().collect()
    }

    /// Role name of the four-letter type.
    pub fn role(&self) -> &'static str {
        match &self.letters {
            ['I', 'N', 'T', 'J'] => "Architect",
            ['I', 'N', 'T', 'P'] => "Logician",
            ['E', 'N', 'T', 'J'] => "Commander",
            ['E', 'N', 'T', 'P'] => "Debater",
            ['I', 'N', 'F', 'J'] => "Advocate",
            ['I', 'N', 'F', 'P'] => "Mediator",
            ['E', 'N', 'F', 'J'] => "Protagonist",
            ['E', 'N', 'F', 'P'] => "Campaigner",
            ['I', 'S', 'T', 'J'] => "Logistician",
            ['I', 'S', 'F', 'J'] => "Defender",
            ['E', 'S', 'T', 'J'] => "Executive",
            ['E', 'S', 'F', 'J'] => "Consul",
            ['I', 'S', 'T', 'P'] => "Virtuoso",
            ['I', 'S', 'F', 'P'] => "Adventurer",
            ['E', 'S', 'T', 'P'] => "Entrepreneur",
            ['E', 'S', 'F', 'P'] => "Entertainer",
            // Letters are checked against the poles on construction.
            _ => unreachable!("type code letters are validated"),
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{letter}")?;
        }
        if let Some(identity) = self.identity {
            write!(f, "-{}", identity.letter())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = TypeCodeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let upper = input.trim().to_ascii_uppercase();
        let (base, identity) = match upper.split_once('-') {
            Some((base, identity)) => (base, Some(identity)),
            None => (upper.as_str(), None),
        };

        let chars: Vec<char> = base.chars().collect();
        if chars.len() != 4 {
            return Err(TypeCodeError::Malformed(input.to_string()));
        }

        let mut letters = ['\0'; 4];
        for ((slot, dimension), letter) in letters.iter_mut().zip(PRIMARY).zip(chars) {
            if letter != dimension.high_pole() && letter != dimension.low_pole() {
                return Err(TypeCodeError::InvalidLetter { dimension, letter });
            }
            *slot = letter;
        }

        let identity = match identity {
            None => None,
            Some("A") => Some(Identity::Assertive),
            Some("T") => Some(Identity::Turbulent),
            Some(other) => {
                let mut chars = other.chars();
                return match (chars.next(), chars.next()) {
                    (Some(letter), None) => Err(TypeCodeError::InvalidIdentity(letter)),
                    _ => Err(TypeCodeError::Malformed(input.to_string())),
                };
            }
        };

        Ok(TypeCode { letters, identity })
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
