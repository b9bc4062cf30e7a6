//! NPC Store - client-side cache of the remote roster
//!
//! Holds the in-memory collection of NPCs plus the transient status the
//! UI observes (`loading`, last error). Every operation goes through the
//! outbound ports and mirrors the server's answer into the collection,
//! so the cache is read-after-write consistent for this client only.
//!
//! The status fields are shared across calls without coordination:
//! concurrent operations interleave their `loading` writes, and the flag
//! reflects whichever operation finished last. That matches the single
//! user widget this backs; per-call outcomes travel in the returned
//! `Result`, which is the primary error channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use rollcall_domain::{CampaignId, Npc, NpcDraft, NpcId};

use crate::application::error::StoreError;
use crate::ports::outbound::{AuthPort, FileStoragePort, NpcDataPort};

/// Bucket subdirectory holding NPC portraits
const IMAGE_PREFIX: &str = "npcs";

/// Client-side record store for the `npcs` table
pub struct NpcStore {
    data: Arc<dyn NpcDataPort>,
    auth: Arc<dyn AuthPort>,
    files: Arc<dyn FileStoragePort>,

    npcs: RwLock<Vec<Npc>>,
    loading: AtomicBool,
    last_error: RwLock<Option<StoreError>>,
}

impl NpcStore {
    pub fn new(
        data: Arc<dyn NpcDataPort>,
        auth: Arc<dyn AuthPort>,
        files: Arc<dyn FileStoragePort>,
    ) -> Self {
        Self {
            data,
            auth,
            files,
            npcs: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Snapshot of the local collection, in server order
    pub fn npcs(&self) -> Vec<Npc> {
        self.read_npcs().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The most recent failure. Not cleared by later successes.
    pub fn last_error(&self) -> Option<StoreError> {
        match self.last_error.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the collection with the remote result set.
    ///
    /// On failure the previous collection is left untouched.
    pub async fn list(&self, campaign: Option<CampaignId>) -> Result<(), StoreError> {
        self.begin();
        let result = async {
            let rows = self.data.list(campaign).await?;
            *self.write_npcs() = rows;
            Ok(())
        }
        .await;
        self.finish(result)
    }

    /// Insert a new NPC owned by the signed-in user and append the
    /// server-returned row to the collection.
    pub async fn create(&self, draft: NpcDraft) -> Result<Npc, StoreError> {
        self.begin();
        let result = async {
            let user = self
                .auth
                .current_user()
                .ok_or(StoreError::NotAuthenticated)?;
            let row = self.data.insert(&draft, user).await?;
            self.write_npcs().push(row.clone());
            Ok(row)
        }
        .await;
        self.finish(result)
    }

    /// Full-row update keyed by id, re-stamped with the signed-in user.
    ///
    /// The first local entry with a matching id is replaced by the
    /// server-returned row. A remote row with no local counterpart
    /// leaves the collection as it was; the update still succeeded.
    pub async fn update(&self, id: NpcId, draft: NpcDraft) -> Result<Npc, StoreError> {
        self.begin();
        let result = async {
            let user = self
                .auth
                .current_user()
                .ok_or(StoreError::NotAuthenticated)?;
            let row = self.data.update(id, &draft, user).await?;
            {
                let mut npcs = self.write_npcs();
                if let Some(entry) = npcs.iter_mut().find(|n| n.id == id) {
                    *entry = row.clone();
                }
            }
            Ok(row)
        }
        .await;
        self.finish(result)
    }

    /// Delete the remote row, then drop the local entry.
    pub async fn delete(&self, id: NpcId) -> Result<(), StoreError> {
        self.begin();
        let result = async {
            self.data.delete(id).await?;
            self.write_npcs().retain(|n| n.id != id);
            Ok(())
        }
        .await;
        self.finish(result)
    }

    /// Upload an image under a fresh name and return its public URL.
    ///
    /// The object name is a v4 uuid keeping the original extension, so
    /// repeated uploads of the same file never collide. Does not touch
    /// the collection; callers put the URL into a draft themselves.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        self.begin();
        let result = async {
            let path = format!("{IMAGE_PREFIX}/{}", unique_object_name(file_name));
            self.files.upload(&path, bytes, content_type).await?;
            Ok(self.files.public_url(&path))
        }
        .await;
        self.finish(result)
    }

    fn begin(&self) {
        self.loading.store(true, Ordering::SeqCst);
    }

    /// Record a failure and drop the loading flag, success or not.
    fn finish<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        if let Err(error) = &result {
            tracing::error!(%error, "npc store operation failed");
            let mut slot = match self.last_error.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *slot = Some(error.clone());
        }
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    fn read_npcs(&self) -> std::sync::RwLockReadGuard<'_, Vec<Npc>> {
        match self.npcs.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_npcs(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Npc>> {
        match self.npcs.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// `portrait.png` -> `<uuid>.png`; extensionless names get a bare uuid.
fn unique_object_name(original: &str) -> String {
    let id = Uuid::new_v4();
    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{id}.{ext}"),
        _ => id.to_string(),
    }
}
