use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `GET /system/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub database: String,
    /// Collection counts reported by the backend; shape is not fixed.
    #[serde(default)]
    pub stats: serde_json::Value,
}

impl HealthReport {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Response from the sync endpoints (`POST /projects/sync`,
/// `POST /videos/sync`, `POST /system/sync-all`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub projects_synced: u32,
    #[serde(default)]
    pub videos_synced: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response from `GET /projects/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectStats {
    pub total_projects: u32,
    pub featured_projects: u32,
    /// Timestamp of the last backend sync, as the backend formats it.
    #[serde(default)]
    pub last_sync: Option<String>,
    #[serde(default)]
    pub cache_fresh: bool,
}
