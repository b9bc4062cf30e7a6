//! In-memory session holder
//!
//! The host application owns the actual sign-in flow; it pushes the
//! resulting user id here so the store can stamp ownership on writes.

use std::sync::RwLock;

use rollcall_domain::UserId;

use crate::ports::outbound::AuthPort;

/// AuthPort adapter backed by a plain in-memory slot
#[derive(Debug, Default)]
pub struct SessionAuth {
    user: RwLock<Option<UserId>>,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: UserId) {
        *self.write_slot() = Some(user);
    }

    pub fn sign_out(&self) {
        *self.write_slot() = None;
    }

    fn write_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<UserId>> {
        // A poisoned lock only means a writer panicked mid-swap of a Copy
        // value; the slot itself is still valid.
        match self.user.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl AuthPort for SessionAuth {
    fn current_user(&self) -> Option<UserId> {
        match self.user.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
