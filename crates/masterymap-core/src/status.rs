//! Mastery tiers.

use serde::{Deserialize, Serialize};

/// Lowest effective score classified as [`MasteryStatus::Review`].
pub const REVIEW_THRESHOLD: f64 = 60.0;
/// Lowest effective score classified as [`MasteryStatus::Mastered`].
pub const MASTERED_THRESHOLD: f64 = 85.0;

/// Tier derived from an effective score. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryStatus {
    Critical,
    Review,
    Mastered,
}

impl MasteryStatus {
    /// Classify an effective score. Boundary values belong to the higher tier.
    pub fn classify(effective_score: f64) -> Self {
        if effective_score >= MASTERED_THRESHOLD {
            MasteryStatus::Mastered
        } else if effective_score >= REVIEW_THRESHOLD {
            MasteryStatus::Review
        } else {
            MasteryStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MasteryStatus::Critical => "critical",
            MasteryStatus::Review => "review",
            MasteryStatus::Mastered => "mastered",
        }
    }

    /// Shade used by the text heatmap.
    pub fn heat_char(&self) -> char {
        match self {
            MasteryStatus::Critical => '░',
            MasteryStatus::Review => '▒',
            MasteryStatus::Mastered => '█',
        }
    }
}
