//! Rollcall client - the NPC record store and its Supabase adapters.
//!
//! Layering follows ports-and-adapters: `application` holds the store,
//! `ports::outbound` the contracts it consumes, `infrastructure` the
//! Supabase-backed implementations. Wire a store up from config:
//!
//! ```no_run
//! use std::sync::Arc;
//! use rollcall_client::application::NpcStore;
//! use rollcall_client::config::SupabaseConfig;
//! use rollcall_client::infrastructure::{SessionAuth, SupabaseRest, SupabaseStorage};
//!
//! # fn main() -> Result<(), rollcall_client::config::ConfigError> {
//! let config = SupabaseConfig::from_env()?;
//! let store = NpcStore::new(
//!     Arc::new(SupabaseRest::new(config.clone())),
//!     Arc::new(SessionAuth::new()),
//!     Arc::new(SupabaseStorage::new(config)),
//! );
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

// Root-level alias so callers can use `rollcall_client::outbound::...`
pub mod outbound {
    pub use crate::ports::outbound::*;
}

pub use application::{NpcStore, StoreError};
pub use config::SupabaseConfig;
