//! Confidence-score banding for clause suggestions.
//!
//! Scores are 0-100 (source: the external suggestion model) and map onto three
//! display tiers with fixed thresholds: >= 80 favorable, 60-79 caution,
//! below 60 unfavorable.

use std::fmt;

/// Visual severity tier for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Favorable,
    Caution,
    Unfavorable,
}

impl ConfidenceTier {
    /// Band a 0-100 score. Boundaries are inclusive on the upper tier:
    /// exactly 80 is favorable and exactly 60 is caution.
    pub fn from_score(score: f32) -> Self {
        if score >= 80.0 {
            ConfidenceTier::Favorable
        } else if score >= 60.0 {
            ConfidenceTier::Caution
        } else {
            ConfidenceTier::Unfavorable
        }
    }

    /// Badge label shown next to a clause.
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::Favorable => "favorable",
            ConfidenceTier::Caution => "caution",
            ConfidenceTier::Unfavorable => "unfavorable",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
