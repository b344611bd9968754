//! Analysis screen: gated document-then-analysis load, clause review, and the
//! accept-changes mutation.

use ndalens_client::{Api, ApiError};
use ndalens_core::{Analysis, Document};
use tracing::error;

use crate::cache::{QueryCache, ResourceKind};
use crate::notify::Notifier;
use crate::phase::Phase;
use crate::route::Route;
use crate::scope::{RequestScope, ScopeToken};

/// Controller for the per-document analysis screen.
///
/// The analysis request is gated on the document fetch: it is issued only
/// once the document has resolved, and the auto-trigger (POST analyze) fires
/// if and only if the document is still in the uploaded state. Documents in
/// any later state get their stored analysis fetched instead; a 404 there is
/// a valid "not analyzed yet" intermediate, not a failure.
pub struct AnalysisScreen<'a, A: Api> {
    api: &'a A,
    document_id: String,
    scope: RequestScope,
    pub document: Phase<Document>,
    pub analysis: Phase<Option<Analysis>>,
    accept_pending: bool,
}

impl<'a, A: Api> AnalysisScreen<'a, A> {
    pub fn new(api: &'a A, document_id: impl Into<String>) -> Self {
        Self {
            api,
            document_id: document_id.into(),
            scope: RequestScope::new(),
            document: Phase::Idle,
            analysis: Phase::Idle,
            accept_pending: false,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Point the screen at a different document: outstanding responses are
    /// cancelled, the left document's cache entries dropped so a return
    /// visit refetches, and both phases reset for a fresh load.
    pub fn set_document_id(&mut self, document_id: impl Into<String>, cache: &mut QueryCache) {
        self.scope.cancel();
        cache.invalidate_document(&self.document_id);
        self.document_id = document_id.into();
        self.document = Phase::Idle;
        self.analysis = Phase::Idle;
        self.accept_pending = false;
    }

    /// Fetch the document, then — once its status is known — the analysis.
    /// Each result is applied through a token-guarded step, so a response
    /// that was in flight when the screen moved on is discarded.
    pub async fn load(&mut self, cache: &mut QueryCache, notifier: &dyn Notifier) {
        let token = self.scope.token();
        self.document = Phase::Loading;
        self.analysis = Phase::Loading;

        let document = match self.fetch_document(cache).await {
            Ok(document) => document,
            Err(err) => {
                self.apply_document_failure(&token, err, notifier);
                return;
            }
        };
        if !self.apply_document(&token, document.clone()) {
            return;
        }
        let result = self.fetch_analysis(&document, cache).await;
        self.apply_analysis(&token, result, notifier);
    }

    /// Accept a fetched document unless the token was cancelled meanwhile.
    /// Returns whether the screen took it.
    fn apply_document(&mut self, token: &ScopeToken, document: Document) -> bool {
        if !token.is_live() {
            return false;
        }
        self.document = Phase::Ready(document);
        true
    }

    fn apply_document_failure(
        &mut self,
        token: &ScopeToken,
        err: ApiError,
        notifier: &dyn Notifier,
    ) {
        if !token.is_live() {
            return;
        }
        error!(error = %err, "document fetch failed");
        notifier.error("Error loading document");
        self.document = Phase::Failed(err.to_string());
        self.analysis = Phase::Idle;
    }

    fn apply_analysis(
        &mut self,
        token: &ScopeToken,
        result: Result<Option<Analysis>, ApiError>,
        notifier: &dyn Notifier,
    ) {
        if !token.is_live() {
            return;
        }
        match result {
            Ok(analysis) => self.analysis = Phase::Ready(analysis),
            Err(err) => {
                error!(error = %err, "analysis fetch failed");
                notifier.error("Error loading analysis");
                self.analysis = Phase::Failed(err.to_string());
            }
        }
    }

    async fn fetch_document(&self, cache: &mut QueryCache) -> Result<Document, ApiError> {
        if let Some(document) = cache.get::<Document>(ResourceKind::Document, &self.document_id) {
            return Ok(document);
        }
        let document = self.api.get_document(&self.document_id).await?;
        cache.insert(ResourceKind::Document, &self.document_id, &document);
        Ok(document)
    }

    async fn fetch_analysis(
        &self,
        document: &Document,
        cache: &mut QueryCache,
    ) -> Result<Option<Analysis>, ApiError> {
        if let Some(analysis) = cache.get::<Analysis>(ResourceKind::Analysis, &self.document_id) {
            return Ok(Some(analysis));
        }
        let analysis = if document.status.needs_analysis() {
            Some(self.api.analyze_document(&self.document_id).await?)
        } else {
            match self.api.get_analysis(&self.document_id).await {
                Ok(analysis) => Some(analysis),
                // Not analyzed yet: gate dependent actions, don't fail.
                Err(err) if err.is_not_found() => None,
                Err(err) => return Err(err),
            }
        };
        if let Some(analysis) = &analysis {
            cache.insert(ResourceKind::Analysis, &self.document_id, analysis);
        }
        Ok(analysis)
    }

    /// Whether the "Provide Feedback" action is available.
    pub fn can_provide_feedback(&self) -> bool {
        matches!(self.analysis, Phase::Ready(Some(_)))
    }

    /// Navigation target of the feedback action. No side effects.
    pub fn feedback_route(&self) -> Route {
        Route::Feedback(self.document_id.clone())
    }

    pub fn is_accepting(&self) -> bool {
        self.accept_pending
    }

    /// Whether the "Accept Changes" action is available.
    pub fn can_accept(&self) -> bool {
        self.can_provide_feedback() && !self.accept_pending
    }

    /// Request the clean revision. On success navigates to the view screen;
    /// on failure the screen is left unchanged and a re-click retries.
    pub async fn accept_changes(&mut self, notifier: &dyn Notifier) -> Option<Route> {
        if !self.begin_accept() {
            return None;
        }
        let token = self.scope.token();
        let result = self.api.create_clean_document(&self.document_id).await;
        self.accept_pending = false;
        if !token.is_live() {
            return None;
        }
        match result {
            Ok(()) => {
                notifier.success("Clean document created successfully");
                Some(Route::View(self.document_id.clone()))
            }
            Err(err) => {
                error!(error = %err, "clean document creation failed");
                notifier.error("Error creating clean document");
                None
            }
        }
    }

    fn begin_accept(&mut self) -> bool {
        if !self.can_accept() {
            return false;
        }
        self.accept_pending = true;
        true
    }
}
