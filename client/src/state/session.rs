//! Session manager: token lifecycle, login, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! One manager is created at the application root and handed to the tree via
//! context. It is the only writer of both the token store and the `Session`
//! signal; everything else observes.
//!
//! CONCURRENCY
//! ===========
//! Initialization and login suspend on network calls. Each captures a session
//! generation ticket before suspending and applies its result only if the
//! ticket is still current, so a logout issued meanwhile always wins and a
//! late profile response never resurrects a signed-out session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::Session;
use crate::net::api::{ApiClient, AuthApi};
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::clock::Clock;
use crate::util::guard::{self, GuardOutcome};
use crate::util::token::{self, TokenError};
use crate::util::token_store::TokenStore;

/// Why `login` did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("login failed: {0}")]
    Api(ApiError),
    #[error("server issued an unusable token: {0}")]
    Token(TokenError),
    #[error("login was cancelled by a sign-out")]
    Superseded,
}

impl AuthError {
    fn from_login(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 400 | 401 | 403, message } => {
                AuthError::InvalidCredentials(message.unwrap_or_else(|| "Invalid email or password".to_owned()))
            }
            ApiError::Network(detail) => AuthError::Network(detail),
            other => AuthError::Api(other),
        }
    }

    /// Text for the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(message) => message.clone(),
            AuthError::Network(_) => "Unable to reach the server. Please try again.".to_owned(),
            AuthError::Api(err) => err.user_message("Login failed. Please try again."),
            AuthError::Token(_) => "Login failed. Please try again.".to_owned(),
            AuthError::Superseded => "Login was cancelled.".to_owned(),
        }
    }
}

#[derive(Clone)]
pub struct SessionManager<S, A, C> {
    session: RwSignal<Session>,
    store: S,
    api: A,
    clock: C,
}

impl<S, A, C> SessionManager<S, A, C>
where
    S: TokenStore,
    A: AuthApi,
    C: Clock,
{
    pub fn new(store: S, api: A, clock: C) -> Self {
        Self { session: RwSignal::new(Session::default()), store, api, clock }
    }

    /// Reactive handle to the session for guards and views.
    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// Resolve the initial `Loading` state from the stored token.
    pub async fn initialize(&self) {
        let ticket = self.begin_attempt();

        let Some(token) = self.store.get() else {
            log::debug!("no stored token");
            self.session.update(|s| {
                s.settle(ticket);
            });
            return;
        };

        let expires_at = match token::live_expiry(&token, &self.clock) {
            Ok(exp) => exp,
            Err(err) => {
                log::info!("discarding stored token: {err}");
                self.store.clear();
                self.session.update(|s| {
                    s.settle(ticket);
                });
                return;
            }
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                let name = user.name.clone();
                if self.apply(ticket, user, token, expires_at) {
                    log::info!("session restored for {name}");
                } else {
                    log::debug!("discarding stale token verification");
                }
            }
            Err(err) => {
                if !self.is_current(ticket) {
                    log::debug!("discarding stale verification failure: {err}");
                    return;
                }
                log::warn!("token verification failed: {err}");
                self.store.clear();
                self.session.update(|s| {
                    s.settle(ticket);
                });
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the session keeps its previous state; a login that loses a
    /// race with `logout` reports `AuthError::Superseded`.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` describing why no session was established.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let ticket = self.begin_attempt();
        let result = self.login_inner(ticket, email, password).await;
        if let Err(err) = &result {
            log::warn!("login failed: {err}");
            // A login started during initialization superseded it; don't leave
            // the session stuck in `Loading`.
            self.session.update(|s| {
                if s.is_loading() {
                    s.settle(ticket);
                }
            });
        }
        result
    }

    async fn login_inner(&self, ticket: u64, email: &str, password: &str) -> Result<User, AuthError> {
        let token = self.api.login(email, password).await.map_err(AuthError::from_login)?;
        if !self.is_current(ticket) {
            return Err(AuthError::Superseded);
        }
        let expires_at = token::live_expiry(&token, &self.clock).map_err(AuthError::Token)?;

        let user = self.api.current_user(&token).await.map_err(|err| match err {
            ApiError::Network(detail) => AuthError::Network(detail),
            other => AuthError::Api(other),
        })?;
        if !self.is_current(ticket) {
            return Err(AuthError::Superseded);
        }

        self.store.set(&token);
        if self.apply(ticket, user.clone(), token, expires_at) {
            log::info!("signed in as {} ({})", user.name, user.role.label());
            Ok(user)
        } else {
            Err(AuthError::Superseded)
        }
    }

    /// Drop the session synchronously. Safe to call repeatedly.
    pub fn logout(&self) {
        self.store.clear();
        self.session.update(Session::sign_out);
        log::info!("signed out");
    }

    /// Demote an authenticated session whose token has expired.
    ///
    /// Returns `true` when the session was demoted.
    pub fn revalidate(&self) -> bool {
        let now = self.clock.now();
        let expired = self.session.with_untracked(|s| s.is_authenticated() && s.is_expired_at(now));
        if expired {
            log::info!("session token expired");
            self.logout();
        }
        expired
    }

    /// Current Unix time from the injected clock.
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Guard decision for `requested` against the current session and clock.
    /// Tracks the session signal when called inside a reactive scope.
    pub fn access(&self, required: Option<Role>, requested: &str) -> GuardOutcome {
        let now = self.clock.now();
        self.session.with(|s| guard::evaluate(s, required, requested, now))
    }

    fn begin_attempt(&self) -> u64 {
        let mut ticket = 0;
        self.session.update(|s| ticket = s.begin_attempt());
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.session.with_untracked(|s| s.is_current(ticket))
    }

    fn apply(&self, ticket: u64, user: User, token: String, expires_at: i64) -> bool {
        let mut applied = false;
        self.session.update(|s| applied = s.authenticate(ticket, user, token, expires_at));
        applied
    }
}

impl<S, C> SessionManager<S, ApiClient, C> {
    /// API client carrying the current session token.
    pub fn client(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().map(str::to_owned));
        self.api.clone().with_token(token)
    }
}
