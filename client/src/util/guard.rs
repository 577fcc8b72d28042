//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` evaluates these on every session change and
//! performs the navigation; this module stays pure so every access rule is
//! unit-tested without a router.
//!
//! RULES
//! =====
//! Authentication, including token expiry, is checked before role. A session
//! still `Loading` never redirects, so a stored token is not bounced to
//! `/login` before it has been verified.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::encode_component;
use crate::net::types::Role;
use crate::state::auth::{Session, SessionStatus};

pub const LOGIN_PATH: &str = "/login";

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session unresolved; show the loading indicator.
    Pending,
    /// Navigate away (replacing history) to the contained href.
    Redirect(String),
    /// Render the protected content.
    Render,
}

/// Decide access to `requested` at Unix time `now` for a route that
/// optionally demands `required`. An authenticated session whose token has
/// expired is treated as signed out.
pub fn evaluate(session: &Session, required: Option<Role>, requested: &str, now: i64) -> GuardOutcome {
    match session.status() {
        SessionStatus::Loading => GuardOutcome::Pending,
        SessionStatus::Unauthenticated => GuardOutcome::Redirect(login_redirect(requested)),
        SessionStatus::Authenticated if session.is_expired_at(now) => GuardOutcome::Redirect(login_redirect(requested)),
        SessionStatus::Authenticated => match (required, session.role()) {
            (Some(required), Some(role)) if role != required => GuardOutcome::Redirect(role.landing_path().to_owned()),
            (_, Some(_)) => GuardOutcome::Render,
            // Unreachable by the session invariant; treat as signed out.
            (_, None) => GuardOutcome::Redirect(login_redirect(requested)),
        },
    }
}

/// `/login` href remembering where the user was headed.
pub fn login_redirect(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?from={}", encode_component(from))
}

/// Where to go after signing in: the remembered location when the role may
/// enter it, otherwise the role's landing page.
pub fn post_login_target(role: Role, from: Option<&str>) -> String {
    from.filter(|path| is_within(path, role.route_prefix()))
        .map_or_else(|| role.landing_path().to_owned(), str::to_owned)
}

fn is_within(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
}
