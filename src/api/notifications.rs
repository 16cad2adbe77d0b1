//! Notification catalog endpoints.

use super::{ApiClient, ApiError};
use crate::types::Notification;

/// Typed operations over `/admin/notifications`.
pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi { client: self }
    }
}

impl NotificationsApi<'_> {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        self.client.get("/admin/notifications").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn get(&self, id: &str) -> Result<Notification, ApiError> {
        self.client.get(&format!("/admin/notifications/{id}")).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create(&self, notification: &Notification) -> Result<Notification, ApiError> {
        self.client.post("/admin/notifications/create", notification).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn update(&self, id: &str, notification: &Notification) -> Result<Notification, ApiError> {
        self.client.put(&format!("/admin/notifications/{id}"), notification).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/notifications/{id}")).await
    }
}
