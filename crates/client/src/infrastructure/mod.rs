//! Infrastructure - concrete implementations of the outbound ports

pub mod session;
pub mod supabase;

pub use session::SessionAuth;
pub use supabase::{SupabaseRest, SupabaseStorage};
