//! Application layer - the NPC record store

pub mod error;
pub mod npc_store;

pub use error::StoreError;
pub use npc_store::NpcStore;
