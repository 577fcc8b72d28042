//! Shared fixtures for unit tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::{Role, User};
use crate::state::auth::Session;

pub fn employer() -> User {
    User {
        id: "e1".to_owned(),
        name: "Erin Employer".to_owned(),
        email: "employer@example.com".to_owned(),
        role: Role::Employer,
    }
}

pub fn manager() -> User {
    User {
        id: "m1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane.doe@example.com".to_owned(),
        role: Role::Manager,
    }
}

/// A syntactically valid JWT whose payload carries `exp`.
pub fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({"sub": "u", "exp": exp}).to_string());
    format!("{header}.{payload}.sig")
}

pub fn signed_in(user: User) -> Session {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    session.authenticate(ticket, user, token_expiring_at(2_000_000_000), 2_000_000_000);
    session
}

pub fn signed_out() -> Session {
    let mut session = Session::default();
    session.sign_out();
    session
}
