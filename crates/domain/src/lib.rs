//! Core domain types for the rollcall NPC roster.
//!
//! This crate holds the entity and identifier types shared by the client
//! store and its adapters. It has no I/O and no async.

pub mod ids;
pub mod npc;

pub use ids::{CampaignId, NpcId, UserId};
pub use npc::{Npc, NpcDraft};
