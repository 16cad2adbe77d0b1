//! Read-only reporting endpoints. All aggregation happens server-side;
//! these calls just fetch the finished numbers.

use super::{ApiClient, ApiError};
use crate::types::{BatchCount, BranchCount, StatsReport, TrendPoint};

/// Typed operations over `/admin/reports`.
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }
}

impl ReportsApi<'_> {
    /// Headline totals for users, events, and notifications.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn stats(&self) -> Result<StatsReport, ApiError> {
        self.client.get("/admin/reports/stats").await
    }

    /// Events created per month.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn event_trend(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.client.get("/admin/reports/events/trend").await
    }

    /// Member registrations per month.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn user_trend(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.client.get("/admin/reports/users/trend").await
    }

    /// Member distribution across branches.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn user_branches(&self) -> Result<Vec<BranchCount>, ApiError> {
        self.client.get("/admin/reports/users/branches").await
    }

    /// Member distribution across batches.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn user_batches(&self) -> Result<Vec<BatchCount>, ApiError> {
        self.client.get("/admin/reports/users/batches").await
    }
}
