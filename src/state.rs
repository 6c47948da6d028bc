//! Application state management

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::extract::TextExtractor;
use crate::storage::ArtifactStore;

/// Shared application state
///
/// Every collaborator is injected at construction and never mutated
/// afterwards, so handlers can run concurrently without coordination and
/// tests can substitute fakes for the extractor and the artifact store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    artifact_store: Arc<dyn ArtifactStore>,
    db: SqlitePool,
    extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        artifact_store: Arc<dyn ArtifactStore>,
        db: SqlitePool,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                artifact_store,
                db,
                extractor,
            }),
        }
    }

    /// Get the artifact store
    pub fn artifact_store(&self) -> &Arc<dyn ArtifactStore> {
        &self.inner.artifact_store
    }

    /// Get the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the text extractor
    pub fn extractor(&self) -> &Arc<dyn TextExtractor> {
        &self.inner.extractor
    }
}
