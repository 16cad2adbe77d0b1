//! Member catalog endpoints.

use super::{ApiClient, ApiError};
use crate::types::User;

/// Typed operations over `/admin/members`.
pub struct MembersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn members(&self) -> MembersApi<'_> {
        MembersApi { client: self }
    }
}

impl MembersApi<'_> {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/admin/members").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&format!("/admin/members/{id}")).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create(&self, user: &User) -> Result<User, ApiError> {
        self.client.post("/admin/members/create", user).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn update(&self, id: &str, user: &User) -> Result<User, ApiError> {
        self.client.put(&format!("/admin/members/{id}"), user).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/members/{id}")).await
    }
}
