//! Artifact storage for rendered pages
//!
//! Pages are immutable blobs in an S3-compatible bucket (MinIO, R2, B2,
//! AWS S3), addressed by `{token}/page_{n}.html`. The [`ArtifactStore`]
//! trait is the seam handlers depend on; tests substitute an in-memory
//! fake.

mod s3_client;

pub use s3_client::S3Client;

use async_trait::async_trait;

use crate::error::StorageError;

/// Durable blob storage for rendered page artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store an artifact and return its public URL.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Resolve an artifact key to its public URL without fetching it.
    async fn resolve(&self, key: &str) -> Result<String, StorageError>;
}
