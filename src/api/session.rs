//! The explicit session object.
//!
//! Built once at startup and shared by reference with the client and every screen.
//! Nothing reads tokens or the current user from ambient storage.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use facultyhub_models::SessionUser;

pub struct Session {
    token: Option<String>,
    user: OnceLock<SessionUser>,
    expired: AtomicBool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: OnceLock::new(),
            expired: AtomicBool::new(false),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::anonymous()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.get()
    }

    /// Records the user returned by the profile endpoint. Later calls are ignored.
    pub(crate) fn set_user(&self, user: SessionUser) {
        let _ = self.user.set(user);
    }

    /// Set once the backend answers 401; every later request is refused locally.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Relaxed)
    }

    pub(crate) fn mark_expired(&self) {
        self.expired.store(true, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user.get().map(|u| &u.username))
            .field("expired", &self.is_expired())
            .finish()
    }
}
