//! Runtime configuration resolved from flags and environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:4000";
pub const SESSION_FILE_ENV: &str = "EVENTDESK_SESSION_FILE";
const SESSION_DIR_NAME: &str = ".eventdesk";
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No `EVENTDESK_SESSION_FILE` override and no detectable home
    /// directory to place the default under.
    #[error("could not determine a home directory for the session file")]
    NoHomeDir,
}

/// Where the console talks to and where it keeps its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub session_file: PathBuf,
}

impl Config {
    /// Resolve configuration around the `--server` value.
    ///
    /// The base URL keeps no trailing slash, so endpoint paths join
    /// cleanly. The session file honors `EVENTDESK_SESSION_FILE` and
    /// otherwise lives under `~/.eventdesk/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] when neither an override nor a
    /// home directory is available.
    pub fn resolve(server: &str) -> Result<Self, ConfigError> {
        let override_path = std::env::var(SESSION_FILE_ENV).ok();
        let session_file = session_file_from(override_path.as_deref(), dirs_next::home_dir())
            .ok_or(ConfigError::NoHomeDir)?;
        Ok(Self { base_url: server.trim_end_matches('/').to_string(), session_file })
    }
}

fn session_file_from(override_path: Option<&str>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) => Some(PathBuf::from(path)),
        None => home.map(|home| home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
