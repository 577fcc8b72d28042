use super::*;
use crate::test_support::{employer, manager};

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_loading_without_identity() {
    let session = Session::default();
    assert_eq!(session.status(), SessionStatus::Loading);
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert_eq!(session.generation(), 0);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn authenticate_with_current_ticket_sets_all_fields() {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    assert!(session.authenticate(ticket, employer(), "tok".to_owned(), 500));
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Employer));
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.expires_at(), Some(500));
}

#[test]
fn authenticate_with_stale_ticket_is_ignored() {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    session.sign_out();
    assert!(!session.authenticate(ticket, manager(), "tok".to_owned(), 500));
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert!(session.user().is_none());
}

#[test]
fn newer_attempt_supersedes_older_one() {
    let mut session = Session::default();
    let first = session.begin_attempt();
    let second = session.begin_attempt();
    assert!(!session.is_current(first));
    assert!(session.authenticate(second, manager(), "b".to_owned(), 10));
    assert!(!session.authenticate(first, employer(), "a".to_owned(), 10));
    assert_eq!(session.role(), Some(Role::Manager));
}

#[test]
fn sign_out_is_idempotent_on_observable_state() {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    session.authenticate(ticket, employer(), "tok".to_owned(), 500);
    session.sign_out();
    let once = (session.status(), session.user().cloned(), session.token().map(str::to_owned));
    session.sign_out();
    let twice = (session.status(), session.user().cloned(), session.token().map(str::to_owned));
    assert_eq!(once, twice);
    assert_eq!(once.0, SessionStatus::Unauthenticated);
}

#[test]
fn settle_moves_loading_to_unauthenticated() {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    assert!(session.settle(ticket));
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
}

#[test]
fn settle_keeps_authenticated_session() {
    let mut session = Session::default();
    let ticket = session.begin_attempt();
    session.authenticate(ticket, employer(), "tok".to_owned(), 500);
    assert!(!session.settle(ticket));
    assert!(session.is_authenticated());
}

#[test]
fn settle_with_stale_ticket_does_nothing() {
    let mut session = Session::default();
    let stale = session.begin_attempt();
    session.begin_attempt();
    assert!(!session.settle(stale));
    assert!(session.is_loading());
}

// =============================================================
// Invariant: Authenticated <=> user <=> token
// =============================================================

#[test]
fn authenticated_iff_user_and_token_present() {
    let mut session = Session::default();
    let check = |s: &Session| {
        assert_eq!(s.is_authenticated(), s.user().is_some());
        assert_eq!(s.is_authenticated(), s.token().is_some());
        assert_eq!(s.is_authenticated(), s.expires_at().is_some());
    };
    check(&session);
    let ticket = session.begin_attempt();
    check(&session);
    session.authenticate(ticket, manager(), "tok".to_owned(), 99);
    check(&session);
    session.sign_out();
    check(&session);
    let ticket = session.begin_attempt();
    session.settle(ticket);
    check(&session);
}

#[test]
fn expiry_check_uses_inclusive_boundary() {
    let mut session = Session::default();
    assert!(!session.is_expired_at(i64::MAX));
    let ticket = session.begin_attempt();
    session.authenticate(ticket, manager(), "tok".to_owned(), 100);
    assert!(!session.is_expired_at(99));
    assert!(session.is_expired_at(100));
}
