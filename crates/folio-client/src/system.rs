//! System commands: health, stats, sync-all.

use folio_core::entities::{HealthReport, SyncReport};
use serde::de::DeserializeOwned;

use crate::{PortfolioClient, Resource, error::ClientError};

impl PortfolioClient {
    /// Backend health.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable or reports
    /// itself unhealthy (503).
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        self.command(Resource::Health).await
    }

    /// Database counts and cache state, as the backend reports them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on any failure.
    pub async fn system_stats(&self) -> Result<serde_json::Value, ClientError> {
        self.command(Resource::SystemStats).await
    }

    /// Ask the backend to re-sync every external source.
    ///
    /// A `200` with `success: false` is a successful call; inspect
    /// [`SyncReport::errors`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on any transport, status, or decode failure.
    pub async fn sync_all(&self) -> Result<SyncReport, ClientError> {
        self.command(Resource::SyncAll).await
    }

    /// Call a command endpoint. Failures are logged and returned, never
    /// replaced.
    pub(crate) async fn command<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<T, ClientError> {
        debug_assert!(resource.is_command(), "{resource} is a read");
        self.call(resource).await.inspect_err(|error| {
            tracing::error!(%resource, %error, "command failed");
        })
    }
}
