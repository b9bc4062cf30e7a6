//! Ports - contracts between the store and the outside world
//!
//! These traits define what the application layer needs from external
//! collaborators, allowing the store to be exercised against mocks and
//! keeping Supabase specifics out of the application layer.

pub mod outbound;
