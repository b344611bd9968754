//! reqwest implementation of the backend seam.

use async_trait::async_trait;
use ndalens_core::{Analysis, CleanDocument, Document, FeedbackSubmission, TrainingOutcome, UploadFile};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::api::Api;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for the review backend.
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn training_url(&self, path: &str) -> String {
        format!("{}{}", self.config.training_base_url(), path)
    }

    /// Send a request, retrying exactly once on transport failure.
    ///
    /// Server rejections (any HTTP status) are never retried; the builder
    /// closure is re-invoked so multipart bodies can be rebuilt.
    async fn send<F>(&self, build: F) -> Result<reqwest::Response, ApiError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        match build().send().await {
            Ok(resp) => Ok(resp),
            Err(err) => {
                warn!(error = %err, "transport failure, retrying once");
                Ok(build().send().await?)
            }
        }
    }

    /// Reject non-success statuses, capturing the body for diagnostics.
    async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn file_part(file: &UploadFile) -> Part {
        Part::bytes(file.bytes.clone()).file_name(file.filename.clone())
    }
}

#[async_trait]
impl Api for ApiClient {
    async fn upload_document(&self, file: &UploadFile) -> Result<Document, ApiError> {
        let url = self.url("/api/documents/upload");
        info!(url = %url, filename = %file.filename, size = file.bytes.len(), "uploading document");

        let resp = self
            .send(|| {
                let form = Form::new().part("file", Self::file_part(file));
                self.client.post(&url).multipart(form)
            })
            .await?;
        let doc: Document = Self::decode(Self::expect_success(resp).await?).await?;
        info!(id = %doc.id, "document uploaded");
        Ok(doc)
    }

    async fn get_document(&self, id: &str) -> Result<Document, ApiError> {
        let url = self.url(&format!("/api/documents/{id}"));
        info!(url = %url, "fetching document");
        let resp = self.send(|| self.client.get(&url)).await?;
        Self::decode(Self::expect_success(resp).await?).await
    }

    async fn analyze_document(&self, id: &str) -> Result<Analysis, ApiError> {
        let url = self.url(&format!("/api/documents/{id}/analyze"));
        info!(url = %url, "requesting analysis");
        let resp = self.send(|| self.client.post(&url)).await?;
        let analysis: Analysis = Self::decode(Self::expect_success(resp).await?).await?;
        info!(clauses = analysis.clauses.len(), "analysis complete");
        Ok(analysis)
    }

    async fn get_analysis(&self, id: &str) -> Result<Analysis, ApiError> {
        let url = self.url(&format!("/api/documents/{id}/analysis"));
        info!(url = %url, "fetching existing analysis");
        let resp = self.send(|| self.client.get(&url)).await?;
        Self::decode(Self::expect_success(resp).await?).await
    }

    async fn create_clean_document(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/documents/{id}/clean"));
        info!(url = %url, "requesting clean document");
        let resp = self.send(|| self.client.post(&url)).await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    async fn get_clean_document(&self, id: &str) -> Result<CleanDocument, ApiError> {
        let url = self.url(&format!("/api/documents/{id}/clean"));
        info!(url = %url, "fetching clean document");
        let resp = self.send(|| self.client.get(&url)).await?;
        Self::decode(Self::expect_success(resp).await?).await
    }

    async fn download_clean_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(&format!("/api/documents/{id}/clean/download"));
        info!(url = %url, "downloading clean document");
        let resp = self.send(|| self.client.get(&url)).await?;
        let bytes = Self::expect_success(resp).await?.bytes().await?;
        info!(size = bytes.len(), "download complete");
        Ok(bytes.to_vec())
    }

    async fn submit_feedback(
        &self,
        id: &str,
        submission: &FeedbackSubmission,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/documents/{id}/feedback"));
        info!(url = %url, entries = submission.feedback.len(), "submitting feedback");
        let resp = self.send(|| self.client.post(&url).json(submission)).await?;
        Self::expect_success(resp).await?;
        Ok(())
    }

    async fn train_from_files(&self, files: &[UploadFile]) -> Result<TrainingOutcome, ApiError> {
        let url = self.training_url("/api/training/train-from-files");
        info!(url = %url, count = files.len(), "training from redline files");

        let resp = self
            .send(|| {
                let mut form = Form::new();
                for file in files {
                    form = form.part("redline_files", Self::file_part(file));
                }
                self.client.post(&url).multipart(form)
            })
            .await?;
        let outcome: TrainingOutcome = Self::decode(Self::expect_success(resp).await?).await?;
        info!(samples = outcome.training_samples, "training complete");
        Ok(outcome)
    }

    async fn test_inference(&self, file: &UploadFile) -> Result<serde_json::Value, ApiError> {
        let url = self.training_url("/api/documents/analyze");
        info!(url = %url, filename = %file.filename, "running test inference");

        let resp = self
            .send(|| {
                let form = Form::new().part("file", Self::file_part(file));
                self.client.post(&url).multipart(form)
            })
            .await?;
        Self::decode(Self::expect_success(resp).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_against_trimmed_base() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8000/"));
        assert_eq!(
            client.url("/api/documents/abc"),
            "http://localhost:8000/api/documents/abc"
        );
    }

    #[test]
    fn training_urls_use_override_host() {
        let config = ApiConfig::new("https://review.example.com")
            .with_training_base_url("http://training.internal:8000");
        let client = ApiClient::new(config);
        assert_eq!(
            client.training_url("/api/training/train-from-files"),
            "http://training.internal:8000/api/training/train-from-files"
        );
        // Document endpoints stay on the main host.
        assert_eq!(
            client.url("/api/documents/abc"),
            "https://review.example.com/api/documents/abc"
        );
    }
}
