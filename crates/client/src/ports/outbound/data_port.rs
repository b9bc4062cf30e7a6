//! NPC Data Port - the remote table contract
//!
//! Models the slice of the remote data service the store actually uses:
//! filtered select, insert-with-return, update-with-return keyed by id,
//! and delete keyed by id. Identifier uniqueness is the remote service's
//! job; nothing here enforces it.
//!
//! Note: the async methods use `async_trait` instead of returning
//! `Pin<Box<dyn Future>>` for better mockall compatibility.

use async_trait::async_trait;

use rollcall_domain::{CampaignId, Npc, NpcDraft, NpcId, UserId};

/// Errors from the remote table API.
///
/// String payloads keep the variants `Clone` so the store can retain the
/// last error while also returning it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// The request never produced a response (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    Request(String),
    /// The service answered with a non-success status
    #[error("Remote service rejected the call ({status}): {body}")]
    Status { status: u16, body: String },
    /// A payload failed to serialize or a response body did not decode
    /// into the expected rows
    #[error("Malformed payload or response: {0}")]
    Decode(String),
}

/// Port for CRUD against the remote `npcs` table
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait NpcDataPort: Send + Sync {
    /// Fetch the fixed projection of NPC rows, optionally restricted to
    /// one campaign. Row order is whatever the remote query returns.
    async fn list(&self, campaign: Option<CampaignId>) -> Result<Vec<Npc>, DataError>;

    /// Insert a row stamped with the owning user and return the row the
    /// server stored.
    async fn insert(&self, draft: &NpcDraft, user: UserId) -> Result<Npc, DataError>;

    /// Full-row update keyed by id, re-stamped with the owning user.
    /// Returns the row the server stored.
    async fn update(&self, id: NpcId, draft: &NpcDraft, user: UserId) -> Result<Npc, DataError>;

    /// Delete the row with the given id.
    async fn delete(&self, id: NpcId) -> Result<(), DataError>;
}
