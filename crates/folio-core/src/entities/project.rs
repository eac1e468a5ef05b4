use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::featured::{FeaturedReason, RepoSignals};
use crate::serde_util::{flexible_utc, string_or_number};

/// A source repository shown on a project card.
///
/// `is_featured` is derived from the other fields. Readers call
/// [`Project::with_featured_recomputed`] instead of trusting the wire value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    /// Unique within one result set.
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub id: String,
    /// Numeric id assigned by the source-hosting service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language tag.
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(deserialize_with = "flexible_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "flexible_utc")]
    #[schemars(with = "DateTime<Utc>")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Project {
    /// The fields the featured classifier looks at.
    #[must_use]
    pub fn signals(&self) -> RepoSignals<'_> {
        RepoSignals {
            name: &self.name,
            stars: self.stargazers_count,
            forks: self.forks_count,
            topics: &self.topics,
        }
    }

    #[must_use]
    pub fn featured_reason(&self) -> Option<FeaturedReason> {
        self.signals().reason()
    }

    /// Replace `is_featured` with the classifier's verdict.
    #[must_use]
    pub fn with_featured_recomputed(mut self) -> Self {
        self.is_featured = self.signals().is_featured();
        self
    }
}
