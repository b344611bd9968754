//! Wire types for documents, clause suggestions, and clean revisions.
//!
//! All of these are server-owned projections: the client fetches them per
//! navigation and never edits them in place. Field names follow the backend's
//! JSON exactly.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a document on the server.
///
/// Only `Uploaded` permits the client to auto-trigger analysis; every other
/// value (including ones this client does not know about yet) leaves the
/// document alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Uploaded,
    Analyzing,
    RedlineReady,
    FeedbackReceived,
    CleanReady,
    Completed,
    /// Status value this client build does not recognise.
    Unknown,
}

impl DocumentStatus {
    /// Whether the review workflow should request analysis for this document.
    pub fn needs_analysis(self) -> bool {
        self == DocumentStatus::Uploaded
    }

    fn as_wire(self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Analyzing => "analyzing",
            DocumentStatus::RedlineReady => "redline_ready",
            DocumentStatus::FeedbackReceived => "feedback_received",
            DocumentStatus::CleanReady => "clean_ready",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Unknown => "unknown",
        }
    }
}

impl Serialize for DocumentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

// Deployed backends have emitted both "uploaded" and "UPLOADED"; decode
// case-insensitively so the analysis gate works against either spelling.
impl<'de> Deserialize<'de> for DocumentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "uploaded" => DocumentStatus::Uploaded,
            "analyzing" => DocumentStatus::Analyzing,
            "redline_ready" => DocumentStatus::RedlineReady,
            "feedback_received" => DocumentStatus::FeedbackReceived,
            "clean_ready" => DocumentStatus::CleanReady,
            "completed" => DocumentStatus::Completed,
            _ => DocumentStatus::Unknown,
        })
    }
}

/// A document record as returned by `/api/documents/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Server-assigned identity, opaque to the client.
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub original_path: Option<String>,
    #[serde(default)]
    pub redline_path: Option<String>,
    #[serde(default)]
    pub clean_path: Option<String>,
}

/// One AI-suggested clause edit within an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseSuggestion {
    pub id: i64,
    pub clause_text: String,
    pub original_text: String,
    pub suggested_text: String,
    /// 0-100 model confidence in the suggestion.
    pub confidence_score: f32,
    /// 0-100 score from the validation pass, when one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_score: Option<f32>,
}

/// Ordered clause suggestions for one document.
///
/// Fetch order is display order: the UI numbers clauses "Clause 1", "Clause 2"
/// by position, not by server id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub clauses: Vec<ClauseSuggestion>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Summary counters attached to a clean document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanMetadata {
    pub original_filename: String,
    pub total_clauses: u32,
    pub modified_clauses: u32,
}

/// The backend-generated result of accepting all clause suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanDocument {
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub metadata: CleanMetadata,
}

impl CleanDocument {
    /// Filename to save a downloaded copy under.
    pub fn download_filename(&self) -> &str {
        if self.metadata.original_filename.is_empty() {
            "document.docx"
        } else {
            &self.metadata.original_filename
        }
    }
}

/// Accept a JSON string or number as an identity, normalised to a string.
///
/// The backend issues UUID strings, but older builds returned integer row ids.
fn id_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer document id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
