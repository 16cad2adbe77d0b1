//! Session, auth-guard, and API-access core of the eventdesk admin console.
//!
//! This crate owns the token lifecycle for the event platform's admin API:
//! a file-backed [`session::SessionStore`] persists the bearer token and
//! admin identity, [`auth::AuthSession`] drives login, logout, and startup
//! verification while publishing observable [`types::AuthState`]
//! snapshots, and [`guard::decide`] turns a snapshot into an access
//! decision. [`api::ApiClient`] dispatches authenticated requests and the
//! [`commands`] module is the console front end over all of it.

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod guard;
pub mod session;
pub mod types;
