//! Event catalog endpoints.

use super::{ApiClient, ApiError};
use crate::types::Event;

/// Typed operations over `/admin/events`.
pub struct EventsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn events(&self) -> EventsApi<'_> {
        EventsApi { client: self }
    }
}

impl EventsApi<'_> {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get("/admin/events").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn get(&self, id: &str) -> Result<Event, ApiError> {
        self.client.get(&format!("/admin/events/{id}")).await
    }

    /// Create an event, returning the stored record with its assigned ids.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create(&self, event: &Event) -> Result<Event, ApiError> {
        self.client.post("/admin/events/create", event).await
    }

    /// Replace the event `id` with `event`, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn update(&self, id: &str, event: &Event) -> Result<Event, ApiError> {
        self.client.put(&format!("/admin/events/{id}"), event).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or `id` is unknown.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/admin/events/{id}")).await
    }
}
