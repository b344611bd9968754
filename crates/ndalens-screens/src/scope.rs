//! Stale-response guards for in-flight requests.
//!
//! The original UI never cancelled requests on navigation, so a slow response
//! could land on a screen that had already moved on. Every controller await
//! here checks its token before applying the result; navigation or a route
//! parameter change cancels the scope.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cancellation scope owned by one screen instance.
#[derive(Debug, Default)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token snapshotting the current generation. Responses obtained against
    /// this token must be discarded once the scope is cancelled.
    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            generation: Arc::clone(&self.generation),
            seen: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate every outstanding token.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Liveness check for one request's scope.
#[derive(Debug, Clone)]
pub struct ScopeToken {
    generation: Arc<AtomicU64>,
    seen: u64,
}

impl ScopeToken {
    pub fn is_live(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_live_until_cancel() {
        let scope = RequestScope::new();
        let token = scope.token();
        assert!(token.is_live());
        scope.cancel();
        assert!(!token.is_live());
    }

    #[test]
    fn new_token_after_cancel_is_live() {
        let scope = RequestScope::new();
        let stale = scope.token();
        scope.cancel();
        let fresh = scope.token();
        assert!(!stale.is_live());
        assert!(fresh.is_live());
    }

    #[test]
    fn cancel_invalidates_all_outstanding_tokens() {
        let scope = RequestScope::new();
        let a = scope.token();
        let b = scope.token();
        scope.cancel();
        assert!(!a.is_live());
        assert!(!b.is_live());
    }
}
