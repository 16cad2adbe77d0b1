//! Auth session lifecycle: startup verification, login, logout.
//!
//! ARCHITECTURE
//! ============
//! [`AuthSession`] is the single writer of the session store and the only
//! producer of [`AuthState`]. Every transition publishes a complete
//! snapshot through a watch channel; consumers subscribe or read the
//! current value, they never mutate.
//!
//! STATE MACHINE
//! =============
//! The process starts Unknown (loading). Startup verification settles it:
//! no stored session means Anonymous with no network call, otherwise the
//! token is checked server-side and the session is either adopted or
//! cleared. From a settled state an explicit login moves through a loading
//! snapshot to Authenticated or back to the previous state with an error
//! message. Logout is local and always lands Anonymous.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::AuthGateway;
use crate::session::SessionStore;
use crate::types::{AuthState, Credentials, Session};

/// Shown when a persisted token no longer passes verification.
const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

/// Owns the auth state machine for one process.
pub struct AuthSession {
    store: SessionStore,
    gateway: Arc<dyn AuthGateway>,
    state: watch::Sender<AuthState>,
}

impl AuthSession {
    /// Start in the Unknown state: nothing decided until
    /// [`verify_startup`](Self::verify_startup) runs.
    #[must_use]
    pub fn new(store: SessionStore, gateway: Arc<dyn AuthGateway>) -> Self {
        let (state, _) = watch::channel(AuthState { loading: true, ..AuthState::default() });
        Self { store, gateway, state }
    }

    /// Settle the initial state from the persisted session. Intended to run
    /// once, before any guarded work.
    ///
    /// With no stored session this is a pure local decision. With one, the
    /// token is verified server-side; any failure (rejection or network)
    /// clears the store so a broken session cannot outlive the check.
    pub async fn verify_startup(&self) -> AuthState {
        if self.store.load().is_none() {
            return self.publish(AuthState::default());
        }

        match self.gateway.verify().await {
            Ok(response) => self.publish(AuthState {
                admin: Some(response.admin),
                authenticated: true,
                loading: false,
                error: None,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "stored session failed verification");
                if let Err(io_err) = self.store.clear() {
                    tracing::warn!(error = %io_err, "failed to clear rejected session");
                }
                self.publish(AuthState {
                    error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
                    ..AuthState::default()
                })
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// Publishes a loading snapshot before the call. On success the session
    /// is persisted first; a persist failure counts as a failed login so
    /// the published state never claims a session the disk does not hold.
    /// On failure the previous admin and authenticated fields survive and
    /// only the error message changes.
    pub async fn login(&self, credentials: &Credentials) -> AuthState {
        let previous = self.state();
        self.publish(AuthState { loading: true, error: None, ..previous.clone() });

        match self.gateway.login(credentials).await {
            Ok(response) => {
                let session = Session { token: response.token, admin: response.admin };
                if let Err(e) = self.store.save(&session) {
                    tracing::error!(error = %e, "failed to persist session");
                    return self.publish(AuthState {
                        loading: false,
                        error: Some(e.to_string()),
                        ..previous
                    });
                }
                tracing::info!(email = %session.admin.email, "login succeeded");
                self.publish(AuthState {
                    admin: Some(session.admin),
                    authenticated: true,
                    loading: false,
                    error: None,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                self.publish(AuthState { loading: false, error: Some(e.to_string()), ..previous })
            }
        }
    }

    /// Drop the session locally. No server call is made; repeating a logout
    /// is harmless.
    pub fn logout(&self) -> AuthState {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to remove session file");
        }
        self.publish(AuthState::default())
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Watch future snapshots. The receiver always sees the latest state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn publish(&self, next: AuthState) -> AuthState {
        self.state.send_replace(next.clone());
        next
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
