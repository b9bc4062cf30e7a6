//! Store error type
//!
//! One Result contract for every store operation. The store also retains
//! the most recent failure for UI display, which is why everything here
//! is `Clone`.

use crate::ports::outbound::{DataError, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A write was attempted with nobody signed in
    #[error("User not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
