//! Supabase storage adapter
//!
//! Uploads blobs into one bucket and builds their public URLs. Uploads
//! never overwrite: `x-upsert: false` makes a second write to the same
//! path a 409 from the bucket.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::SupabaseConfig;
use crate::ports::outbound::{FileStoragePort, StorageError};

const CACHE_CONTROL: &str = "3600";

/// Client for the Supabase storage API
#[derive(Clone)]
pub struct SupabaseStorage {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseStorage {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url, self.config.bucket, path
        )
    }
}

#[async_trait]
impl FileStoragePort for SupabaseStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        tracing::debug!(path, size = bytes.len(), "uploading object");
        let response = self
            .client
            .post(self.object_url(path))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("x-upsert", "false")
            .header("cache-control", CACHE_CONTROL)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url, self.config.bucket, path
        )
    }
}
