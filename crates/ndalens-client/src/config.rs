//! Endpoint configuration.
//!
//! Every request is built against one base URL. The training endpoints
//! historically lived on a separately deployed host, so they get an optional
//! override that falls back to the main base.

/// Where the review backend lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    training_base_url: Option<String>,
}

impl ApiConfig {
    /// Build a config for the given base URL, e.g. `http://localhost:8000`
    /// (trailing slashes are stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            training_base_url: None,
        }
    }

    /// Route training/test-inference requests to a different host.
    pub fn with_training_base_url(mut self, url: impl Into<String>) -> Self {
        self.training_base_url = Some(trim_base(url.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL for the training screen's endpoints.
    pub fn training_base_url(&self) -> &str {
        self.training_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed() {
        let cfg = ApiConfig::new("http://localhost:8000/");
        assert_eq!(cfg.base_url(), "http://localhost:8000");
    }

    #[test]
    fn training_falls_back_to_base() {
        let cfg = ApiConfig::new("http://localhost:8000");
        assert_eq!(cfg.training_base_url(), "http://localhost:8000");
    }

    #[test]
    fn training_override() {
        let cfg = ApiConfig::new("https://review.example.com")
            .with_training_base_url("http://training.internal:8000/");
        assert_eq!(cfg.base_url(), "https://review.example.com");
        assert_eq!(cfg.training_base_url(), "http://training.internal:8000");
    }
}
