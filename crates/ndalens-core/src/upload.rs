//! Client-side upload acceptance.
//!
//! Only `.docx` is accepted, and the check runs before any bytes leave the
//! client. The backend enforces the same rule independently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extension accepted by every file picker in the workflow.
pub const ACCEPTED_EXTENSION: &str = "docx";

/// MIME type the original drop zone filtered on.
pub const ACCEPTED_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0} (only .docx is accepted)")]
    UnsupportedFormat(String),
}

/// An in-memory file selected for upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap a selection, rejecting anything that is not a `.docx`.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
        let filename = filename.into();
        if !accepts_filename(&filename) {
            return Err(UploadError::UnsupportedFormat(filename));
        }
        Ok(Self { filename, bytes })
    }
}

/// Whether a filename passes the client-side format filter.
pub fn accepts_filename(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION))
}
