use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One stage of the assessment. The order of `ROUNDS` is the sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    Aptitude,
    Technical,
    GroupDiscussion,
    Hr,
}

pub const ROUNDS: [Round; 4] = [
    Round::Aptitude,
    Round::Technical,
    Round::GroupDiscussion,
    Round::Hr,
];

impl Round {
    pub fn id(self) -> &'static str {
        match self {
            Round::Aptitude => "aptitude",
            Round::Technical => "technical",
            Round::GroupDiscussion => "group_discussion",
            Round::Hr => "hr",
        }
    }

    /// Navigation target for the round. Opaque to the flow itself.
    pub fn path(self) -> &'static str {
        match self {
            Round::Aptitude => "/aptitude",
            Round::Technical => "/technical",
            Round::GroupDiscussion => "/group-discussion",
            Round::Hr => "/hr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Round::Aptitude => "Aptitude Round",
            Round::Technical => "Technical Round",
            Round::GroupDiscussion => "Group Discussion",
            Round::Hr => "HR Round",
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            Round::Aptitude => 0,
            Round::Technical => 1,
            Round::GroupDiscussion => 2,
            Round::Hr => 3,
        }
    }

    pub fn at(ordinal: usize) -> Option<Round> {
        ROUNDS.get(ordinal).copied()
    }

    pub fn next(self) -> Option<Round> {
        Round::at(self.ordinal() + 1)
    }

    /// Resolves a navigation path to a round. Trailing slashes, query strings and
    /// fragments are ignored; anything else must match exactly.
    pub fn from_path(path: &str) -> Option<Round> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        ROUNDS.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown round: {0}")]
pub struct UnknownRound(pub String);

impl FromStr for Round {
    type Err = UnknownRound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUNDS
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| UnknownRound(s.to_string()))
    }
}
