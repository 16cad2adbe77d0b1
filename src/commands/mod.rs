//! Command runners behind the CLI surface.
//!
//! ARCHITECTURE
//! ============
//! `run` wires the session store, gateway, and auth session together from
//! resolved configuration, then dispatches to one runner per resource.
//! Every runner that touches protected endpoints goes through
//! [`require_auth`] first: startup verification settles the auth state and
//! the route guard decides whether the operation may proceed.
//!
//! Data goes to stdout as pretty JSON; progress and confirmations go to
//! stderr through tracing, so output stays pipeable.

pub mod auth;
pub mod events;
pub mod members;
pub mod notifications;
pub mod reports;

use std::io;
use std::io::Write;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::auth::AuthSession;
use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError};
use crate::guard::{self, RouteDecision};
use crate::session::SessionStore;
use crate::types::Admin;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Login attempt settled unauthenticated; carries the state's error
    /// message.
    #[error("{0}")]
    LoginFailed(String),

    /// A guarded command ran without a valid session.
    #[error("Not logged in. Run 'eventdesk login' first.")]
    NotLoggedIn,

    #[error("could not read password: {0}")]
    PasswordPrompt(String),

    #[error("terminal read failed: {0}")]
    Io(#[from] io::Error),

    #[error("output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the core from CLI-level configuration and dispatch the command.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration, authentication, or the
/// requested operation fails.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::resolve(&cli.server)?;
    let store = SessionStore::new(config.session_file.clone());
    let client = ApiClient::new(config.base_url.clone(), store.clone())?;
    let session = AuthSession::new(store, Arc::new(client.clone()));

    match cli.command {
        Command::Login(args) => auth::login(&session, args).await,
        Command::Logout => auth::logout(&session),
        Command::Whoami => auth::whoami(&session).await,
        Command::Event(command) => events::run(&client, &session, command.command).await,
        Command::Notification(command) => {
            notifications::run(&client, &session, command.command).await
        }
        Command::Member(command) => members::run(&client, &session, command.command).await,
        Command::Report(command) => reports::run(&client, &session, command.command).await,
    }
}

/// Settle the auth state and apply the route guard.
///
/// A `Wait` decision keeps watching the published state until it settles;
/// only a settled unauthenticated state turns the operator away.
///
/// # Errors
///
/// Returns [`CliError::NotLoggedIn`] when no valid session exists.
pub(crate) async fn require_auth(session: &AuthSession) -> Result<Admin, CliError> {
    let mut state = session.verify_startup().await;
    let mut updates = session.subscribe();
    loop {
        match guard::decide(&state) {
            RouteDecision::Allow => return state.admin.ok_or(CliError::NotLoggedIn),
            RouteDecision::RedirectToLogin => return Err(CliError::NotLoggedIn),
            RouteDecision::Wait => {
                if updates.changed().await.is_err() {
                    return Err(CliError::NotLoggedIn);
                }
                state = updates.borrow().clone();
            }
        }
    }
}

/// Render a payload as pretty JSON on stdout.
///
/// # Errors
///
/// Returns [`CliError::Json`] if the payload cannot be serialized.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ask for a yes/no confirmation on the terminal. Defaults to no.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the terminal cannot be read.
pub(crate) fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
