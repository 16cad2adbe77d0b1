//! Access decision for protected operations.
//!
//! Kept as a pure function over an [`AuthState`] snapshot so the rule is
//! testable without a controller or a network. The command layer applies
//! the decision; nothing here performs the redirect itself.

use crate::types::AuthState;

/// What a protected operation should do for a given auth snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Verification is still in flight; hold and wait for a settled state.
    Wait,
    /// Settled and unauthenticated; send the operator to the login flow.
    RedirectToLogin,
    /// Settled and authenticated; proceed.
    Allow,
}

/// Decide access from a snapshot.
///
/// While `loading` is true the answer is always [`RouteDecision::Wait`]: an
/// unfinished verification is not a "no", and redirecting on it would bounce
/// operators with valid sessions through the login screen.
#[must_use]
pub fn decide(state: &AuthState) -> RouteDecision {
    if state.loading {
        RouteDecision::Wait
    } else if state.authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToLogin
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
