use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::rounds::{Round, ROUNDS};

/// `Sequence` gates rounds by position; `Standalone` allows direct practice of any round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    #[default]
    Sequence,
    Standalone,
}

impl AssessmentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentMode::Sequence => "sequence",
            AssessmentMode::Standalone => "standalone",
        }
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequence" => Ok(AssessmentMode::Sequence),
            "standalone" => Ok(AssessmentMode::Standalone),
            other => Err(format!("unknown assessment mode: {other}")),
        }
    }
}

/// Mutable state of one candidate's assessment.
///
/// An empty `job_role` means no assessment is active. `current_round_index` is
/// always a valid ordinal; 0 doubles as the "before start" value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub job_role: String,
    pub mode: AssessmentMode,
    pub current_round_index: usize,
    pub completed_round_ids: BTreeSet<Round>,
    pub collected_suggestions: Vec<String>,
}

impl AssessmentSession {
    pub fn is_active(&self) -> bool {
        !self.job_role.is_empty()
    }

    /// The round the sequence currently requires.
    pub fn current_round(&self) -> Round {
        Round::at(self.current_round_index).unwrap_or(ROUNDS[ROUNDS.len() - 1])
    }

    pub fn is_completed(&self, round: Round) -> bool {
        self.completed_round_ids.contains(&round)
    }

    /// Appends suggestions, skipping blanks and strings already collected.
    /// Returns how many were added.
    pub fn collect_suggestions<I>(&mut self, suggestions: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.collected_suggestions.len();
        for suggestion in suggestions {
            let suggestion = suggestion.trim();
            if suggestion.is_empty()
                || self.collected_suggestions.iter().any(|s| s == suggestion)
            {
                continue;
            }
            self.collected_suggestions.push(suggestion.to_string());
        }
        self.collected_suggestions.len() - before
    }
}
