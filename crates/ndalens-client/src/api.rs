//! The backend operation seam.
//!
//! Screen controllers talk to this trait, never to reqwest directly, so the
//! whole workflow can run against an in-memory double in tests.

use async_trait::async_trait;
use ndalens_core::{Analysis, CleanDocument, Document, FeedbackSubmission, TrainingOutcome, UploadFile};

use crate::error::ApiError;

/// Every backend operation the review workflow performs.
#[async_trait]
pub trait Api: Send + Sync {
    /// `POST /api/documents/upload` — submit a new document.
    async fn upload_document(&self, file: &UploadFile) -> Result<Document, ApiError>;

    /// `GET /api/documents/{id}` — fetch document state.
    async fn get_document(&self, id: &str) -> Result<Document, ApiError>;

    /// `POST /api/documents/{id}/analyze` — run clause analysis.
    async fn analyze_document(&self, id: &str) -> Result<Analysis, ApiError>;

    /// `GET /api/documents/{id}/analysis` — fetch an existing analysis.
    async fn get_analysis(&self, id: &str) -> Result<Analysis, ApiError>;

    /// `POST /api/documents/{id}/clean` — generate the clean revision.
    async fn create_clean_document(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/documents/{id}/clean` — fetch the clean revision.
    async fn get_clean_document(&self, id: &str) -> Result<CleanDocument, ApiError>;

    /// `GET /api/documents/{id}/clean/download` — raw file bytes.
    async fn download_clean_document(&self, id: &str) -> Result<Vec<u8>, ApiError>;

    /// `POST /api/documents/{id}/feedback` — submit clause ratings/comments.
    async fn submit_feedback(
        &self,
        id: &str,
        submission: &FeedbackSubmission,
    ) -> Result<(), ApiError>;

    /// `POST /api/training/train-from-files` — retrain on redline documents.
    async fn train_from_files(&self, files: &[UploadFile]) -> Result<TrainingOutcome, ApiError>;

    /// `POST /api/documents/analyze` — one-off inference against the current
    /// model; the payload shape is owned by the backend.
    async fn test_inference(&self, file: &UploadFile) -> Result<serde_json::Value, ApiError>;
}
