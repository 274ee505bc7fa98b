use crate::builder::build_document;
use crate::config::ServiceMetadata;
use crate::document::Document;
use crate::registry::SchemaRegistry;
use crate::serializer::to_json_bytes;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL_CACHE: OnceLock<DocumentCache> = OnceLock::new();

/// Process-wide cache instance for callers that want the original
/// "one description document per process" behavior.
pub fn global_document_cache() -> &'static DocumentCache {
    GLOBAL_CACHE.get_or_init(DocumentCache::new)
}

/// One generation of the description document: the built graph together with
/// the bytes it serialized to. Both are produced by the same `generate` call,
/// so readers can never observe a graph from one generation paired with bytes
/// from another.
#[derive(Debug)]
pub struct ApiSnapshot {
    pub document: Document,
    pub json: Vec<u8>,
}

/// Holds the most recently generated snapshot. Regeneration happens only when
/// `generate` is explicitly invoked; reads are concurrent and block only for
/// the duration of the snapshot swap.
pub struct DocumentCache {
    current: RwLock<Option<Arc<ApiSnapshot>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        DocumentCache {
            current: RwLock::new(None),
        }
    }

    /// Rebuilds the document from the given metadata and registry state,
    /// serializes it, and replaces the cached snapshot as one unit. The
    /// previous generation is dropped once its last reader releases it.
    pub fn generate(
        &self,
        metadata: &ServiceMetadata,
        registry: &SchemaRegistry,
    ) -> Arc<ApiSnapshot> {
        let document = build_document(metadata, registry);
        let json = to_json_bytes(&document);
        let snapshot = Arc::new(ApiSnapshot { document, json });
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&snapshot));
        log::debug!("Regenerated api description document ({} bytes)", snapshot.json.len());
        snapshot
    }

    /// The most recent snapshot, or `None` if `generate` has not run yet.
    pub fn current(&self) -> Option<Arc<ApiSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Serialized bytes of the most recent snapshot.
    pub fn current_json(&self) -> Option<Vec<u8>> {
        self.current().map(|snapshot| snapshot.json.clone())
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        DocumentCache::new()
    }
}
