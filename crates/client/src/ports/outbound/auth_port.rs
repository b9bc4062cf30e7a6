//! Auth Port - the session contract
//!
//! The store only needs to know who is signed in right now; sign-in and
//! token refresh live with the host application.

use rollcall_domain::UserId;

/// Port exposing the current authenticated user, if any
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthPort: Send + Sync {
    /// The identifier of the signed-in user, or `None` when signed out
    fn current_user(&self) -> Option<UserId>;
}
