//! Clean-document screen: metadata, verbatim content, and download.

use ndalens_client::{Api, ApiError};
use ndalens_core::CleanDocument;
use tracing::error;

use crate::cache::{QueryCache, ResourceKind};
use crate::notify::Notifier;
use crate::phase::Phase;
use crate::route::Route;
use crate::scope::{RequestScope, ScopeToken};

/// A downloaded copy of the clean document, ready to hand to a save dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Controller for the clean-document view screen.
pub struct ViewScreen<'a, A: Api> {
    api: &'a A,
    document_id: String,
    scope: RequestScope,
    pub clean: Phase<CleanDocument>,
}

impl<'a, A: Api> ViewScreen<'a, A> {
    pub fn new(api: &'a A, document_id: impl Into<String>) -> Self {
        Self {
            api,
            document_id: document_id.into(),
            scope: RequestScope::new(),
            clean: Phase::Idle,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Point the screen at a different document: outstanding responses are
    /// cancelled and the left document's cache entries dropped so a return
    /// visit refetches.
    pub fn set_document_id(&mut self, document_id: impl Into<String>, cache: &mut QueryCache) {
        self.scope.cancel();
        cache.invalidate_document(&self.document_id);
        self.document_id = document_id.into();
        self.clean = Phase::Idle;
    }

    /// Fetch the clean document, applying the result through a token-guarded
    /// step so a response in flight when the screen moved on is discarded.
    pub async fn load(&mut self, cache: &mut QueryCache, notifier: &dyn Notifier) {
        let token = self.scope.token();
        self.clean = Phase::Loading;

        let result = self.fetch_clean(cache).await;
        self.apply_clean(&token, result, notifier);
    }

    async fn fetch_clean(&self, cache: &mut QueryCache) -> Result<CleanDocument, ApiError> {
        if let Some(clean) =
            cache.get::<CleanDocument>(ResourceKind::CleanDocument, &self.document_id)
        {
            return Ok(clean);
        }
        let clean = self.api.get_clean_document(&self.document_id).await?;
        cache.insert(ResourceKind::CleanDocument, &self.document_id, &clean);
        Ok(clean)
    }

    fn apply_clean(
        &mut self,
        token: &ScopeToken,
        result: Result<CleanDocument, ApiError>,
        notifier: &dyn Notifier,
    ) {
        if !token.is_live() {
            return;
        }
        match result {
            Ok(clean) => self.clean = Phase::Ready(clean),
            Err(err) => {
                error!(error = %err, "clean document fetch failed");
                notifier.error("Error loading clean document");
                self.clean = Phase::Failed(err.to_string());
            }
        }
    }

    /// Fetch the binary form of the clean document. A failure notifies but
    /// leaves the rendered content untouched; the filename falls back to a
    /// generic name when metadata is unavailable.
    pub async fn download(&self, notifier: &dyn Notifier) -> Option<DownloadedFile> {
        match self.api.download_clean_document(&self.document_id).await {
            Ok(bytes) => {
                let filename = self
                    .clean
                    .value()
                    .map(|clean| clean.download_filename().to_string())
                    .unwrap_or_else(|| "document.docx".to_string());
                Some(DownloadedFile { filename, bytes })
            }
            Err(err) => {
                error!(error = %err, "download failed");
                notifier.error("Error downloading document");
                None
            }
        }
    }

    /// Plain navigation back to the analysis screen.
    pub fn back_route(&self) -> Route {
        Route::Analysis(self.document_id.clone())
    }
}
