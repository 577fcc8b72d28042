//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and user-aware components; written only by the
//! session manager (`state::session`).
//!
//! INVARIANTS
//! ==========
//! `Authenticated` holds exactly when a user, a token, and its expiry are all
//! present. Fields are private so no other path can break that.
//! `generation` increases on every sign-out and every new verification
//! attempt; async results tagged with an older generation are rejected.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Stored token not yet verified.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
    token: Option<String>,
    expires_at: Option<i64>,
    generation: u64,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Whether the held token has expired at `now`. Sessions without a token
    /// never report expiry.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Start an async verification; returns the ticket it must present later.
    pub fn begin_attempt(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    /// Install an identity if `ticket` is still current. Returns whether the
    /// session changed.
    pub fn authenticate(&mut self, ticket: u64, user: User, token: String, expires_at: i64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = SessionStatus::Authenticated;
        self.user = Some(user);
        self.token = Some(token);
        self.expires_at = Some(expires_at);
        true
    }

    /// Drop any identity and invalidate every outstanding attempt.
    pub fn sign_out(&mut self) {
        self.status = SessionStatus::Unauthenticated;
        self.user = None;
        self.token = None;
        self.expires_at = None;
        self.generation += 1;
    }

    /// Leave `Loading` for `Unauthenticated` when the attempt holding
    /// `ticket` ends without an identity. Authenticated sessions are kept.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) || self.is_authenticated() {
            return false;
        }
        self.status = SessionStatus::Unauthenticated;
        true
    }
}
