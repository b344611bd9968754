//! Response cache keyed by resource kind plus document id.
//!
//! This is the only state shared between screens: each query entry is scoped
//! to one document, so a different route id is always a miss and triggers a
//! refetch. Training and test-inference results are deliberately never cached.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Cacheable resource families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Document,
    Analysis,
    CleanDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    kind: ResourceKind,
    document_id: String,
}

/// In-memory cache of fetched responses.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, kind: ResourceKind, document_id: &str) -> Option<T> {
        let key = QueryKey {
            kind,
            document_id: document_id.to_string(),
        };
        let value = self.entries.get(&key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&mut self, kind: ResourceKind, document_id: &str, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        debug!(?kind, document_id, "caching response");
        self.entries.insert(
            QueryKey {
                kind,
                document_id: document_id.to_string(),
            },
            value,
        );
    }

    /// Drop every cached entry for one document.
    pub fn invalidate_document(&mut self, document_id: &str) {
        self.entries.retain(|key, _| key.document_id != document_id);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndalens_core::{Document, DocumentStatus};

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            status: DocumentStatus::Uploaded,
            original_path: None,
            redline_path: None,
            clean_path: None,
        }
    }

    #[test]
    fn hit_requires_matching_kind_and_id() {
        let mut cache = QueryCache::new();
        cache.insert(ResourceKind::Document, "a", &doc("a"));

        assert!(cache.get::<Document>(ResourceKind::Document, "a").is_some());
        // Different id: miss, forcing a refetch.
        assert!(cache.get::<Document>(ResourceKind::Document, "b").is_none());
        // Same id, different kind: independent entry.
        assert!(cache.get::<Document>(ResourceKind::Analysis, "a").is_none());
    }

    #[test]
    fn invalidate_clears_all_kinds_for_the_document() {
        let mut cache = QueryCache::new();
        cache.insert(ResourceKind::Document, "a", &doc("a"));
        cache.insert(ResourceKind::Analysis, "a", &serde_json::json!({"clauses": []}));
        cache.insert(ResourceKind::Document, "b", &doc("b"));

        cache.invalidate_document("a");
        assert!(cache.get::<Document>(ResourceKind::Document, "a").is_none());
        assert!(
            cache
                .get::<serde_json::Value>(ResourceKind::Analysis, "a")
                .is_none()
        );
        assert!(cache.get::<Document>(ResourceKind::Document, "b").is_some());
    }
}
