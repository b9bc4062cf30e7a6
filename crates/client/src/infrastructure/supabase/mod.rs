//! Supabase adapters for the outbound ports

pub mod rest;
pub mod storage;

pub use rest::SupabaseRest;
pub use storage::SupabaseStorage;
