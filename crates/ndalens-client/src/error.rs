use thiserror::Error;

/// Failures at the client/backend boundary.
///
/// `Transport` covers everything below HTTP (DNS, refused connections,
/// timeouts); `Server` is any non-success status with the body captured for
/// diagnostics; `Json` is a payload the client could not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code for server rejections, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is a 404 — used by callers that treat a missing
    /// resource as a valid intermediate state rather than a failure.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
