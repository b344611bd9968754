//! Feedback screen: per-clause ratings and comments over a freshly fetched
//! analysis.

use ndalens_client::{Api, ApiError};
use ndalens_core::{Analysis, FeedbackDraft};
use tracing::error;

use crate::cache::{QueryCache, ResourceKind};
use crate::notify::Notifier;
use crate::phase::Phase;
use crate::route::Route;
use crate::scope::{RequestScope, ScopeToken};

/// Controller for the feedback screen.
///
/// Drafts are rebuilt empty on every load; a failed submit preserves every
/// entered rating and comment so nothing is lost on retry.
pub struct FeedbackScreen<'a, A: Api> {
    api: &'a A,
    document_id: String,
    scope: RequestScope,
    pub analysis: Phase<Option<Analysis>>,
    draft: FeedbackDraft,
    submit_pending: bool,
}

impl<'a, A: Api> FeedbackScreen<'a, A> {
    pub fn new(api: &'a A, document_id: impl Into<String>) -> Self {
        Self {
            api,
            document_id: document_id.into(),
            scope: RequestScope::new(),
            analysis: Phase::Idle,
            draft: FeedbackDraft::new(),
            submit_pending: false,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    /// Point the screen at a different document: outstanding responses are
    /// cancelled, the draft discarded, and the left document's cache entries
    /// dropped so a return visit refetches.
    pub fn set_document_id(&mut self, document_id: impl Into<String>, cache: &mut QueryCache) {
        self.scope.cancel();
        cache.invalidate_document(&self.document_id);
        self.document_id = document_id.into();
        self.analysis = Phase::Idle;
        self.draft = FeedbackDraft::new();
        self.submit_pending = false;
    }

    /// Fetch the analysis this screen collects feedback against. Uses the
    /// same cache key semantics as the analysis screen but issues its own
    /// request on a miss. The result is applied through a token-guarded
    /// step, so a response in flight when the screen moved on is discarded.
    pub async fn load(&mut self, cache: &mut QueryCache, notifier: &dyn Notifier) {
        let token = self.scope.token();
        self.analysis = Phase::Loading;
        self.draft = FeedbackDraft::new();

        let result = self.fetch_analysis(cache).await;
        self.apply_analysis(&token, result, notifier);
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

    async fn fetch_analysis(&self, cache: &mut QueryCache) -> Result<Option<Analysis>, ApiError> {
        if let Some(analysis) = cache.get::<Analysis>(ResourceKind::Analysis, &self.document_id) {
            return Ok(Some(analysis));
        }
        match self.api.get_analysis(&self.document_id).await {
            Ok(analysis) => {
                cache.insert(ResourceKind::Analysis, &self.document_id, &analysis);
                Ok(Some(analysis))
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn set_rating(&mut self, clause_id: i64, rating: u8) {
        self.draft.set_rating(clause_id, rating);
    }

    pub fn set_comment(&mut self, clause_id: i64, comment: impl Into<String>) {
        self.draft.set_comment(clause_id, comment);
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_pending
    }

    /// Submit every non-empty draft in one request. Success navigates back to
    /// the analysis screen; failure preserves all entered state.
    pub async fn submit(&mut self, notifier: &dyn Notifier) -> Option<Route> {
        if !self.begin_submit() {
            return None;
        }
        let token = self.scope.token();
        let submission = self.draft.to_submission();
        let result = self.api.submit_feedback(&self.document_id, &submission).await;
        self.submit_pending = false;
        if !token.is_live() {
            return None;
        }
        match result {
            Ok(()) => {
                notifier.success("Feedback submitted successfully");
                Some(Route::Analysis(self.document_id.clone()))
            }
            Err(err) => {
                error!(error = %err, "feedback submission failed");
                notifier.error("Error submitting feedback");
                None
            }
        }
    }

    /// Discard all drafts and navigate back. Always succeeds.
    pub fn cancel(self) -> Route {
        Route::Analysis(self.document_id)
    }

    fn begin_submit(&mut self) -> bool {
        if self.submit_pending {
            return false;
        }
        self.submit_pending = true;
        true
    }
}
