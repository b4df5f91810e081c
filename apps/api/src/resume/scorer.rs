//! Resume scorer: pluggable, trait-based skill-gap analysis of extracted resume text.
//!
//! Default: `KeywordResumeScorer` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::resume::taxonomy::{SkillDefinition, SKILL_TAXONOMY};

/// Score for a skill with keyword evidence, before frequency bonuses.
const VERIFIED_BASE: u32 = 30;
const PER_OCCURRENCE: u32 = 10;
/// 100 is never awarded from keyword counts alone.
const VERIFIED_CAP: u32 = 95;
const UNVERIFIED_SCORE: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One taxonomy skill checked against the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapResult {
    pub skill_name: String,
    pub verified: bool,
    /// Total keyword occurrences across all variants.
    pub frequency: u32,
    pub relevance_score: u32, // 0 – 100
    pub is_gap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<SkillGapResult>, // taxonomy order
    pub total_score: u32,            // 0 – 100
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: String,
    pub scorer_backend: String, // "keyword"
}

impl ResumeAnalysis {
    /// Report suggestions for every skill without evidence.
    pub fn gap_suggestions(&self) -> Vec<String> {
        self.missing_skills
            .iter()
            .map(|skill| {
                format!("Add evidence of {skill} to your resume (projects, roles or certifications).")
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Swap scorer backends without touching the upload handler.
pub trait ResumeScorer: Send + Sync {
    fn analyze(&self, text: &str) -> ResumeAnalysis;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordResumeScorer (default implementation)
// ────────────────────────────────────────────────────────────────────────────

/// Keyword scorer over a fixed taxonomy.
///
/// Algorithm:
/// 1. Lower-case the text once.
/// 2. A skill is verified when any keyword variant is a substring of the text.
/// 3. frequency = Σ non-overlapping occurrences of every variant
/// 4. relevance = verified ? min(30 + 10 × frequency, 95) : 10
/// 5. total = round(mean relevance), 0 for an empty taxonomy
pub struct KeywordResumeScorer {
    taxonomy: &'static [SkillDefinition],
}

impl KeywordResumeScorer {
    pub fn with_taxonomy(taxonomy: &'static [SkillDefinition]) -> Self {
        Self { taxonomy }
    }
}

impl Default for KeywordResumeScorer {
    fn default() -> Self {
        Self::with_taxonomy(SKILL_TAXONOMY)
    }
}

impl ResumeScorer for KeywordResumeScorer {
    fn analyze(&self, text: &str) -> ResumeAnalysis {
        compute_skill_gaps(text, self.taxonomy)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_skill_gaps(text: &str, taxonomy: &[SkillDefinition]) -> ResumeAnalysis {
    let text_lower = text.to_lowercase();

    let skills: Vec<SkillGapResult> = taxonomy
        .iter()
        .map(|skill| score_skill(&text_lower, skill))
        .collect();

    let total_score = if skills.is_empty() {
        0
    } else {
        let sum: u32 = skills.iter().map(|s| s.relevance_score).sum();
        (sum as f64 / skills.len() as f64).round() as u32
    };

    let found_skills: Vec<String> = skills
        .iter()
        .filter(|s| s.verified)
        .map(|s| s.skill_name.clone())
        .collect();
    let missing_skills: Vec<String> = skills
        .iter()
        .filter(|s| s.is_gap)
        .map(|s| s.skill_name.clone())
        .collect();

    let recommendation = build_recommendation(total_score, &missing_skills);

    ResumeAnalysis {
        skills,
        total_score,
        found_skills,
        missing_skills,
        recommendation,
        scorer_backend: "keyword".to_string(),
    }
}

fn score_skill(text_lower: &str, skill: &SkillDefinition) -> SkillGapResult {
    let verified = skill.keywords.iter().any(|kw| text_lower.contains(kw));
    let frequency: u32 = skill
        .keywords
        .iter()
        .map(|kw| text_lower.matches(kw).count() as u32)
        .sum();

    let relevance_score = if verified {
        (VERIFIED_BASE + frequency.saturating_mul(PER_OCCURRENCE)).min(VERIFIED_CAP)
    } else {
        UNVERIFIED_SCORE
    };

    SkillGapResult {
        skill_name: skill.name.to_string(),
        verified,
        frequency,
        relevance_score,
        is_gap: !verified,
    }
}

fn build_recommendation(score: u32, missing: &[String]) -> String {
    let top_gaps: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();

    if missing.is_empty() {
        format!("Every core skill has evidence in your resume ({score}/100).")
    } else if score >= 60 {
        format!(
            "Good coverage ({score}/100). Strengthen: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Limited coverage ({score}/100). Missing evidence for: {}.",
            top_gaps.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
