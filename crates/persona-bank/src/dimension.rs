use serde::{Deserialize, Serialize};

/// One of the five independent bipolar scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Extraversion,
    Intuition,
    Feeling,
    Judging,
    Assertive,
}

impl Dimension {
    /// Fixed order used for type codes and reports.
    pub const ALL: [Dimension; 5] = [
        Dimension::Extraversion,
        Dimension::Intuition,
        Dimension::Feeling,
        Dimension::Judging,
        Dimension::Assertive,
    ];

    /// Key used in result records (`extraversion`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Extraversion => "extraversion",
            Dimension::Intuition => "intuition",
            Dimension::Feeling => "feeling",
            Dimension::Judging => "judging",
            Dimension::Assertive => "assertive",
        }
    }

    /// Key used in question bank files.
    pub fn bank_key(self) -> &'static str {
        match self {
            Dimension::Extraversion => "E_I",
            Dimension::Intuition => "S_N",
            Dimension::Feeling => "T_F",
            Dimension::Judging => "J_P",
            Dimension::Assertive => "A_T",
        }
    }

    /// Letter chosen when the score is at or above the midpoint.
    pub fn high_pole(self) -> char {
        match self {
            Dimension::Extraversion => 'E',
            Dimension::Intuition => 'N',
            Dimension::Feeling => 'F',
            Dimension::Judging => 'J',
            Dimension::Assertive => 'A',
        }
    }

    /// Letter chosen when the score is below the midpoint.
    pub fn low_pole(self) -> char {
        match self {
            Dimension::Extraversion => 'I',
            Dimension::Intuition => 'S',
            Dimension::Feeling => 'T',
            Dimension::Judging => 'P',
            Dimension::Assertive => 'T',
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
