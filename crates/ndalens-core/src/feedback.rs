//! Per-clause feedback drafting and submission payloads.
//!
//! The Feedback screen keeps one draft per clause id. Drafts start empty on
//! every fresh load, partial edits keep the untouched field, and drafts with
//! neither a rating nor a comment are dropped when the payload is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One submitted feedback row, keyed by the clause it rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub clause_id: i64,
    /// 1-5 star rating; 0 means unset.
    pub rating: u8,
    pub comment: String,
}

/// Body of `POST /api/documents/{id}/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub feedback: Vec<FeedbackEntry>,
}

/// In-progress feedback for one analysis, keyed by clause id.
#[derive(Debug, Clone, Default)]
pub struct FeedbackDraft {
    entries: BTreeMap<i64, FeedbackEntry>,
}

impl FeedbackDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rating for a clause, preserving any comment already entered.
    pub fn set_rating(&mut self, clause_id: i64, rating: u8) {
        self.entry(clause_id).rating = rating;
    }

    /// Set the comment for a clause, preserving any rating already entered.
    pub fn set_comment(&mut self, clause_id: i64, comment: impl Into<String>) {
        self.entry(clause_id).comment = comment.into();
    }

    pub fn rating(&self, clause_id: i64) -> u8 {
        self.entries.get(&clause_id).map_or(0, |e| e.rating)
    }

    pub fn comment(&self, clause_id: i64) -> &str {
        self.entries.get(&clause_id).map_or("", |e| &e.comment)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the submission payload, dropping drafts where the rating is unset
    /// and the comment is blank.
    pub fn to_submission(&self) -> FeedbackSubmission {
        let feedback = self
            .entries
            .values()
            .filter(|e| e.rating > 0 || !e.comment.trim().is_empty())
            .cloned()
            .collect();
        FeedbackSubmission { feedback }
    }

    fn entry(&mut self, clause_id: i64) -> &mut FeedbackEntry {
        self.entries.entry(clause_id).or_insert_with(|| FeedbackEntry {
            clause_id,
            rating: 0,
            comment: String::new(),
        })
    }
}
