//! File-backed session persistence.
//!
//! ARCHITECTURE
//! ============
//! One JSON document holds the bearer token and the admin identity it
//! belongs to, set together and cleared together. The auth controller is
//! the only writer; the API gateway reads back just the token when
//! decorating requests.
//!
//! TRADE-OFFS
//! ==========
//! Saves go through a temp file and rename, so a crash mid-write leaves
//! the previous session intact. Unreadable or malformed files load as
//! "no session" rather than an error; the worst case is a fresh login.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::types::Session;

/// Persistent store for the current admin session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

/// Projection used when only the token is needed. Skips the admin half of
/// the document entirely.
#[derive(serde::Deserialize)]
struct StoredToken {
    token: String,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Restore the persisted session, if any.
    ///
    /// Missing, unreadable, and malformed files all mean "not logged in";
    /// this never fails.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "stored session is malformed, treating as logged out");
                None
            }
        }
    }

    /// Persist a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the session directory cannot be created
    /// or the document cannot be written.
    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session).map_err(io::Error::other)?;
        // Write-then-rename keeps token and admin atomic on disk.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    /// Remove the persisted session. Clearing an already-empty store is a
    /// success, so logout can always be retried.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the file exists but cannot be removed.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Read just the bearer token, for request decoration.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<StoredToken>(&raw).ok().map(|stored| stored.token)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
