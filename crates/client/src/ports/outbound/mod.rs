//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement: the remote table API, the storage bucket, and the auth
//! session. Application code depends on these traits, never on the
//! concrete Supabase adapters.

pub mod auth_port;
pub mod data_port;
pub mod file_storage_port;

pub use auth_port::AuthPort;
pub use data_port::{DataError, NpcDataPort};
pub use file_storage_port::{FileStoragePort, StorageError};

#[cfg(any(test, feature = "testing"))]
pub use auth_port::MockAuthPort;
#[cfg(any(test, feature = "testing"))]
pub use data_port::MockNpcDataPort;
#[cfg(any(test, feature = "testing"))]
pub use file_storage_port::MockFileStoragePort;
