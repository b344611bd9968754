//! Scripted in-memory backend for controller tests.

use async_trait::async_trait;
use ndalens_client::{Api, ApiError};
use ndalens_core::{Analysis, CleanDocument, Document, FeedbackSubmission, TrainingOutcome, UploadFile};
use std::collections::HashSet;
use std::sync::Mutex;

use crate::notify::Notifier;

/// Operation names used for scripting failures and asserting call counts.
pub mod op {
    pub const UPLOAD: &str = "upload";
    pub const GET_DOCUMENT: &str = "get_document";
    pub const ANALYZE: &str = "analyze";
    pub const GET_ANALYSIS: &str = "get_analysis";
    pub const CREATE_CLEAN: &str = "create_clean";
    pub const GET_CLEAN: &str = "get_clean";
    pub const DOWNLOAD: &str = "download";
    pub const FEEDBACK: &str = "feedback";
    pub const TRAIN: &str = "train";
    pub const TEST: &str = "test";
}

#[derive(Default)]
pub struct MockApi {
    pub document: Mutex<Option<Document>>,
    pub analysis: Mutex<Option<Analysis>>,
    pub upload_response: Mutex<Option<Document>>,
    pub clean_document: Mutex<Option<CleanDocument>>,
    pub download_bytes: Mutex<Option<Vec<u8>>>,
    pub training_outcome: Mutex<Option<TrainingOutcome>>,
    pub test_payload: Mutex<Option<serde_json::Value>>,
    pub last_feedback: Mutex<Option<FeedbackSubmission>>,
    failing: Mutex<HashSet<&'static str>>,
    missing: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `op` to fail with a 500.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Script `op` to return a 404.
    pub fn missing(&self, op: &'static str) {
        self.missing.lock().unwrap().insert(op);
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn enter(&self, op: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(op);
        if self.missing.lock().unwrap().contains(op) {
            return Err(ApiError::Server {
                status: 404,
                body: "not found".into(),
            });
        }
        if self.failing.lock().unwrap().contains(op) {
            return Err(ApiError::Server {
                status: 500,
                body: "mock failure".into(),
            });
        }
        Ok(())
    }

    fn scripted<T: Clone>(slot: &Mutex<Option<T>>, what: &str) -> T {
        slot.lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| panic!("mock has no scripted {what}"))
    }
}

#[async_trait]
impl Api for MockApi {
    async fn upload_document(&self, _file: &UploadFile) -> Result<Document, ApiError> {
        self.enter(op::UPLOAD)?;
        Ok(Self::scripted(&self.upload_response, "upload response"))
    }

    async fn get_document(&self, _id: &str) -> Result<Document, ApiError> {
        self.enter(op::GET_DOCUMENT)?;
        Ok(Self::scripted(&self.document, "document"))
    }

    async fn analyze_document(&self, _id: &str) -> Result<Analysis, ApiError> {
        self.enter(op::ANALYZE)?;
        Ok(Self::scripted(&self.analysis, "analysis"))
    }

    async fn get_analysis(&self, _id: &str) -> Result<Analysis, ApiError> {
        self.enter(op::GET_ANALYSIS)?;
        Ok(Self::scripted(&self.analysis, "analysis"))
    }

    async fn create_clean_document(&self, _id: &str) -> Result<(), ApiError> {
        self.enter(op::CREATE_CLEAN)
    }

    async fn get_clean_document(&self, _id: &str) -> Result<CleanDocument, ApiError> {
        self.enter(op::GET_CLEAN)?;
        Ok(Self::scripted(&self.clean_document, "clean document"))
    }

    async fn download_clean_document(&self, _id: &str) -> Result<Vec<u8>, ApiError> {
        self.enter(op::DOWNLOAD)?;
        Ok(Self::scripted(&self.download_bytes, "download bytes"))
    }

    async fn submit_feedback(
        &self,
        _id: &str,
        submission: &FeedbackSubmission,
    ) -> Result<(), ApiError> {
        self.enter(op::FEEDBACK)?;
        *self.last_feedback.lock().unwrap() = Some(submission.clone());
        Ok(())
    }

    async fn train_from_files(&self, _files: &[UploadFile]) -> Result<TrainingOutcome, ApiError> {
        self.enter(op::TRAIN)?;
        Ok(Self::scripted(&self.training_outcome, "training outcome"))
    }

    async fn test_inference(&self, _file: &UploadFile) -> Result<serde_json::Value, ApiError> {
        self.enter(op::TEST)?;
        Ok(Self::scripted(&self.test_payload, "test payload"))
    }
}

/// Collects notifications for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Standard fixtures shared across controller tests.
pub mod fixtures {
    use ndalens_core::{
        Analysis, ClauseSuggestion, CleanDocument, CleanMetadata, Document, DocumentStatus,
    };

    pub fn document(id: &str, status: DocumentStatus) -> Document {
        Document {
            id: id.to_string(),
            status,
            original_path: Some(format!("/data/user_1/{id}.docx")),
            redline_path: None,
            clean_path: None,
        }
    }

    pub fn clause(id: i64, confidence_score: f32) -> ClauseSuggestion {
        ClauseSuggestion {
            id,
            clause_text: format!("clause text {id}"),
            original_text: format!("original text {id}"),
            suggested_text: format!("suggested text {id}"),
            confidence_score,
            validation_score: None,
        }
    }

    pub fn analysis(scores: &[(i64, f32)]) -> Analysis {
        Analysis {
            clauses: scores.iter().map(|&(id, s)| clause(id, s)).collect(),
        }
    }

    pub fn clean_document(id: &str) -> CleanDocument {
        CleanDocument {
            id: id.to_string(),
            content: "CLEAN CONTENT\n  preserved indent".to_string(),
            created_at: "2026-03-01T09:30:00Z".parse().unwrap(),
            metadata: CleanMetadata {
                original_filename: "nda_v3.docx".to_string(),
                total_clauses: 12,
                modified_clauses: 4,
            },
        }
    }
}
