//! Typed domain model for the eventdesk admin console.
//!
//! Wire-format types shared by the API gateway, session store, and auth
//! controller. Field attributes bind Rust naming to the platform API's
//! JSON (Mongo-style `_id`, lowercase compound names), so every other
//! module works with plain typed structs.

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH & SESSION
// =============================================================================

/// Login form payload. Ephemeral: sent once, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authenticated staff identity as returned by the platform API.
///
/// The API may include a password hash in its admin documents; this type
/// deliberately has no such field, so the hash is dropped at the
/// deserialization boundary and can never be persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Server-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
}

/// A verified login: bearer token plus the admin it belongs to.
///
/// Always persisted and cleared as one unit so the pair cannot tear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub admin: Admin,
}

/// Observable authentication state published by the auth controller.
///
/// Recomputed from session checks and login attempts, never persisted.
/// `loading` is true only while startup verification or a login call is
/// in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Body of a successful `POST /admin-login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub admin: Admin,
    pub token: String,
}

/// Body of a successful `GET /admin/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub admin: Admin,
    pub message: String,
}

// =============================================================================
// CATALOG RECORDS
// =============================================================================

/// Member cohort, named by entry and graduation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Batch {
    #[serde(rename = "22-26")]
    #[value(name = "22-26")]
    Y2226,
    #[serde(rename = "23-27")]
    #[value(name = "23-27")]
    Y2327,
    #[serde(rename = "24-28")]
    #[value(name = "24-28")]
    Y2428,
}

/// A registered member of the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Platform-assigned public identifier, distinct from `_id`.
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    /// Write-only. Omitted from edit payloads when unchanged; never echoed
    /// back into client state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub branch: String,
    pub batch: Batch,
    /// College registration number.
    pub regno: u32,
    pub mobileno: u64,
    #[serde(rename = "isverified")]
    pub is_verified: bool,
}

/// An event run by the club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "eventId", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub name: String,
    #[serde(rename = "imagelink")]
    pub image_link: String,
    /// Transported as an opaque string; the API owns the format.
    pub date: String,
    #[serde(rename = "pdflink")]
    pub pdf_link: String,
    /// Registration window is open.
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    #[serde(rename = "isResultAnnounced")]
    pub is_result_announced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winners: Option<Vec<String>>,
    pub prize: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "participantsCount", skip_serializing_if = "Option::is_none")]
    pub participants_count: Option<u32>,
}

/// A broadcast notification shown to members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

// =============================================================================
// REPORTS
// =============================================================================

/// Headline counters for the report dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub users: UserStats,
    pub events: EventStats,
    pub notifications: NotificationStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub verified: u64,
    pub unverified: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStats {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
    #[serde(rename = "withResults")]
    pub with_results: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total: u64,
}

/// One month of a creation/registration trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: u32,
    pub label: String,
    pub count: u64,
}

/// Members-per-branch distribution row. The group key is absent for
/// records that never set a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub count: u64,
}

/// Members-per-batch distribution row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    pub count: u64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
