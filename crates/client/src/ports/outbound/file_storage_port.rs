//! File Storage Port - the blob bucket contract
//!
//! Covers exactly what image upload needs: write-once content upload and
//! public URL retrieval. Bucket selection is the adapter's concern.

use async_trait::async_trait;

/// Errors from the storage bucket API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The upload request never produced a response
    #[error("Upload failed: {0}")]
    Upload(String),
    /// The bucket rejected the object (includes 409 when the path exists)
    #[error("Storage rejected the object ({status}): {body}")]
    Status { status: u16, body: String },
}

/// Port for blob upload and public URL retrieval
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FileStoragePort: Send + Sync {
    /// Upload `bytes` to `path` inside the bucket. Never overwrites an
    /// existing object at that path.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Public URL for an object at `path`. Purely constructed; does not
    /// check that the object exists.
    fn public_url(&self, path: &str) -> String;
}
