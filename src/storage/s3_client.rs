//! S3-compatible storage client
//!
//! Wraps the AWS SDK for S3-compatible storage access.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::{Credentials, Region},
    primitives::ByteStream,
    Client,
};

use crate::config::StorageConfig;
use crate::error::StorageError;

use super::ArtifactStore;

/// S3-compatible storage client
#[derive(Clone)]
pub struct S3Client {
    client: Client,
    bucket: String,
    public_base: String,
}

impl S3Client {
    /// Create a new S3 client from configuration.
    ///
    /// Verifies the bucket exists and attempts to create it when missing,
    /// so a fresh deployment works without manual bucket setup.
    pub async fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "scrollforge",
        );

        let region = config
            .region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint)
            .region(Region::new(region))
            .credentials_provider(credentials)
            .force_path_style(true) // Required for MinIO and other S3-compatible services
            .build();

        let client = Client::from_conf(s3_config);

        let bucket = config.bucket.clone();
        match client.head_bucket().bucket(&bucket).send().await {
            Ok(_) => {
                tracing::info!("Connected to S3 bucket: {}", bucket);
            }
            Err(_) => {
                tracing::info!("Bucket {} not found, attempting to create it", bucket);
                if let Err(e) = client.create_bucket().bucket(&bucket).send().await {
                    tracing::warn!(
                        "Could not create bucket {}: {}. Will attempt operations anyway.",
                        bucket,
                        e
                    );
                }
            }
        }

        // Pages are served by redirecting clients straight at the bucket,
        // so a public base URL must be derivable.
        let public_base = config
            .public_url
            .clone()
            .unwrap_or_else(|| {
                format!(
                    "{}/{}",
                    config.endpoint.trim_end_matches('/'),
                    config.bucket
                )
            })
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            bucket,
            public_base,
        })
    }
}

#[async_trait]
impl ArtifactStore for S3Client {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::SdkError(format!("Failed to put object {}: {}", key, e)))?;

        Ok(format!("{}/{}", self.public_base, key))
    }

    async fn resolve(&self, key: &str) -> Result<String, StorageError> {
        Ok(format!("{}/{}", self.public_base, key))
    }
}
