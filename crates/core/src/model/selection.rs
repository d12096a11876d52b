use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which bundled question collection to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSetKind {
    Normal,
    Scenario,
}

impl QuestionSetKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionSetKind::Normal => "normal",
            QuestionSetKind::Scenario => "scenario",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionSetKind::Normal => "Normal Questions",
            QuestionSetKind::Scenario => "Scenario Questions",
        }
    }
}

impl fmt::Display for QuestionSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionSetKind {
    type Err = UnknownSelection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "normal" => Ok(Self::Normal),
            "scenario" => Ok(Self::Scenario),
            other => Err(UnknownSelection(other.to_string())),
        }
    }
}

/// Untimed study or timed exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    Study,
    Exam,
}

impl PracticeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PracticeMode::Study => "study",
            PracticeMode::Exam => "exam",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PracticeMode {
    type Err = UnknownSelection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "study" => Ok(Self::Study),
            "exam" => Ok(Self::Exam),
            other => Err(UnknownSelection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown selection: {0}")]
pub struct UnknownSelection(pub String);
