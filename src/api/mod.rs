//! HTTP gateway to the platform admin API.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient`] owns the connection pool, base URL, and request
//! decoration: JSON content type on every call, bearer token whenever the
//! session store holds one. Per-resource catalogs (auth, events, members,
//! notifications, reports) are thin typed maps over it.
//!
//! ERROR NORMALIZATION
//! ===================
//! Rejections carry the server's `message` field when the error body has
//! one, with a generic fallback otherwise. Transport failures and timeouts
//! become [`ApiError::Network`]. The gateway never touches session state,
//! even on 401; reacting to auth failures is the controller's job.

pub mod auth;
pub mod events;
pub mod members;
pub mod notifications;
pub mod reports;

pub use auth::AuthGateway;

use std::time::Duration;

use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::SessionStore;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const FALLBACK_MESSAGE: &str = "Something went wrong";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// server's own wording and is shown to the operator as-is.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// No usable response arrived: connect failure, timeout, or a broken
    /// transfer.
    #[error("network error: {0}")]
    Network(String),

    /// The success body could not be deserialized into the expected type.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// =============================================================================
// CLIENT
// =============================================================================

/// Authenticated HTTP client for the admin API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore,
}

impl ApiClient {
    /// Build a client for the given base URL, reading bearer tokens from
    /// `store` at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: String, store: SessionStore) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, store })
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for rejected, unreachable, or undecodable
    /// responses.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(self.http.get(self.url(path))).await?;
        decode(&body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for rejected, unreachable, or undecodable
    /// responses.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.execute(self.http.post(self.url(path)).json(body)).await?;
        decode(&body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for rejected, unreachable, or undecodable
    /// responses.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.execute(self.http.put(self.url(path)).json(body)).await?;
        decode(&body)
    }

    /// Delete a resource. The response body, if any, is discarded, so this
    /// works against endpoints that answer 204 as well as ones that echo a
    /// confirmation document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for rejected or unreachable responses.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(path))).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token, send, and normalize the outcome to the
    /// response body text.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let request = match self.store.token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        };
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }
        Ok(body)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the server's error message from a rejection body. Pure parsing
/// for testability; anything unusable falls back to the generic wording.
#[must_use]
pub(crate) fn parse_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
