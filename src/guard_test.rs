use super::*;
use crate::types::Admin;

fn state(authenticated: bool, loading: bool, error: Option<&str>) -> AuthState {
    AuthState {
        admin: authenticated
            .then(|| Admin { id: Some("1".into()), email: "admin@club.org".into() }),
        authenticated,
        loading,
        error: error.map(String::from),
    }
}

// =============================================================================
// Loading never redirects
// =============================================================================

#[test]
fn waits_while_anonymous_and_loading() {
    assert_eq!(decide(&state(false, true, None)), RouteDecision::Wait);
}

#[test]
fn waits_while_authenticated_and_loading() {
    assert_eq!(decide(&state(true, true, None)), RouteDecision::Wait);
}

#[test]
fn waits_even_with_a_pending_error() {
    assert_eq!(decide(&state(false, true, Some("Session expired. Please login again."))), RouteDecision::Wait);
}

// =============================================================================
// Settled states
// =============================================================================

#[test]
fn redirects_when_settled_and_anonymous() {
    assert_eq!(decide(&state(false, false, None)), RouteDecision::RedirectToLogin);
}

#[test]
fn redirects_after_a_failed_login() {
    assert_eq!(decide(&state(false, false, Some("Invalid credentials"))), RouteDecision::RedirectToLogin);
}

#[test]
fn allows_when_settled_and_authenticated() {
    assert_eq!(decide(&state(true, false, None)), RouteDecision::Allow);
}

#[test]
fn allows_despite_a_stale_error_message() {
    // A failed re-login keeps the old session; the error alone must not
    // lock the operator out.
    assert_eq!(decide(&state(true, false, Some("Invalid credentials"))), RouteDecision::Allow);
}

#[test]
fn fresh_default_state_redirects() {
    assert_eq!(decide(&AuthState::default()), RouteDecision::RedirectToLogin);
}
