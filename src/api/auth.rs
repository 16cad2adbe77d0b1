//! Login and token verification endpoints.

use super::{ApiClient, ApiError};
use crate::types::{Credentials, LoginResponse, VerifyResponse};

/// Auth endpoints behind a trait seam. Enables mocking in tests: the auth
/// controller is exercised against scripted gateways instead of a live
/// server.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a bearer token and the admin it belongs to.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the credentials are rejected or the
    /// server is unreachable.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Ask the server whether the stored token is still good.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the token is expired, revoked, or the
    /// server is unreachable.
    async fn verify(&self) -> Result<VerifyResponse, ApiError>;
}

#[async_trait::async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post("/admin-login", credentials).await
    }

    async fn verify(&self) -> Result<VerifyResponse, ApiError> {
        self.get("/admin/verify").await
    }
}
