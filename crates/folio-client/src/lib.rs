//! # folio-client
//!
//! HTTP clients for the portfolio backend.
//!
//! Every page read tries its backend endpoint once (10 s timeout by default)
//! and substitutes static fallback data on any failure, so a section always
//! has something to render:
//! - profile, social links, videos: backend → static
//! - featured videos: backend → the videos read
//! - projects, featured projects: backend → public repository listing →
//!   static (see [`ProjectTier`])
//!
//! Commands (project/video sync, sync-all, health, stats) return
//! [`ClientError`] instead, so callers can show an error state.

mod error;
mod http;
mod listing;
mod profile;
mod projects;
mod resource;
mod social;
mod system;
mod tiers;
mod videos;

pub use error::ClientError;
pub use resource::{Method, Resource};
pub use tiers::{DEFAULT_PROJECT_TIERS, ProjectScope, ProjectTier};

use std::fmt;
use std::time::Duration;

use folio_config::{FolioConfig, GithubConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode};

// ── Types ──────────────────────────────────────────────────────────

/// Where a read's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// The portfolio backend answered.
    Backend,
    /// The public repository listing answered (projects only).
    PublicListing,
    /// Built-in fallback data.
    Static,
}

impl DataOrigin {
    #[must_use]
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Static)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::PublicListing => "public_listing",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read result together with its origin.
///
/// The plain read methods drop the origin; the `*_with_origin` variants keep
/// it for callers that need to tell live data from fallback data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    #[must_use]
    pub const fn new(value: T, origin: DataOrigin) -> Self {
        Self { value, origin }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the portfolio backend and its public listing fallback.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    github: GithubConfig,
    project_tiers: Vec<ProjectTier>,
}

impl PortfolioClient {
    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build (TLS backend initialization).
    pub fn new(config: &FolioConfig) -> Result<Self, ClientError> {
        let timeout = Duration::from_secs(config.api.timeout_secs);
        let http = reqwest::Client::builder()
            .user_agent(config.github.user_agent.as_str())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url().to_string(),
            timeout,
            github: config.github.clone(),
            project_tiers: DEFAULT_PROJECT_TIERS.to_vec(),
        })
    }

    /// Replace the ordered list of project tiers.
    ///
    /// Lets a caller run one tier in isolation, or skip the listing tier.
    #[must_use]
    pub fn with_project_tiers(mut self, tiers: impl Into<Vec<ProjectTier>>) -> Self {
        self.project_tiers = tiers.into();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn project_tiers(&self) -> &[ProjectTier] {
        &self.project_tiers
    }

    fn endpoint(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    /// Make one call to a backend endpoint and decode its body.
    async fn call<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, ClientError> {
        let url = self.endpoint(resource);
        let request = match resource.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        let resp = check_response(request.timeout(self.timeout).send().await?).await?;
        let value = decode(resp).await?;
        tracing::debug!(%resource, "backend call succeeded");
        Ok(value)
    }

    /// Call a read endpoint, substituting `fallback()` on any failure.
    async fn read_or_fallback<T, F>(&self, resource: Resource, fallback: F) -> Sourced<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.call(resource).await {
            Ok(value) => Sourced::new(value, DataOrigin::Backend),
            Err(error) => {
                tracing::warn!(%resource, %error, "read failed, serving fallback data");
                Sourced::new(fallback(), DataOrigin::Static)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> FolioConfig {
        let mut config = FolioConfig::default();
        config.api.base_url = base_url.to_string();
        config
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = PortfolioClient::new(&config("http://localhost:8001/api/")).unwrap();
        assert_eq!(
            client.endpoint(Resource::SocialLinks),
            "http://localhost:8001/api/social-links"
        );
    }

    #[test]
    fn default_chain_has_three_tiers() {
        let client = PortfolioClient::new(&FolioConfig::default()).unwrap();
        assert_eq!(
            client.project_tiers(),
            &[
                ProjectTier::Backend,
                ProjectTier::PublicListing,
                ProjectTier::Static
            ]
        );
    }

    #[test]
    fn tiers_can_be_replaced() {
        let client = PortfolioClient::new(&FolioConfig::default())
            .unwrap()
            .with_project_tiers([ProjectTier::PublicListing]);
        assert_eq!(client.project_tiers(), &[ProjectTier::PublicListing]);
    }

    #[test]
    fn sourced_map_keeps_origin() {
        let sourced = Sourced::new(vec![1, 2, 3], DataOrigin::PublicListing).map(|v| v.len());
        assert_eq!(sourced.value, 3);
        assert_eq!(sourced.origin, DataOrigin::PublicListing);
        assert!(sourced.origin.is_live());
        assert!(!DataOrigin::Static.is_live());
    }

    #[test]
    fn origin_labels_match_wire_names() {
        for origin in [DataOrigin::Backend, DataOrigin::PublicListing, DataOrigin::Static] {
            let wire = serde_json::to_value(origin).unwrap();
            assert_eq!(wire, origin.as_str());
            assert_eq!(origin.to_string(), origin.as_str());
        }
    }
}
