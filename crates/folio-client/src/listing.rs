//! Public repository listing client (the second project tier).
//!
//! Lists the configured owner's repositories, newest update first, drops
//! forks and archived repositories, and maps the rest onto [`Project`].

use chrono::{DateTime, Utc};
use folio_core::entities::Project;

use crate::{
    PortfolioClient,
    error::ClientError,
    http::{check_response, decode},
};

#[derive(serde::Deserialize)]
struct RepoRecord {
    id: u64,
    name: String,
    description: Option<String>,
    language: Option<String>,
    html_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    stargazers_count: u32,
    #[serde(default)]
    forks_count: u32,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
}

impl RepoRecord {
    fn is_listed(&self) -> bool {
        !self.fork && !self.archived
    }

    fn into_project(self) -> Project {
        let description = self
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("A {} project", self.language.as_deref().unwrap_or("code")));

        Project {
            id: self.id.to_string(),
            github_id: Some(self.id),
            name: self.name,
            description: Some(description),
            language: self.language,
            html_url: self.html_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
            stargazers_count: self.stargazers_count,
            forks_count: self.forks_count,
            topics: self.topics,
            is_featured: false,
        }
        .with_featured_recomputed()
    }
}

fn to_projects(records: Vec<RepoRecord>) -> Vec<Project> {
    records
        .into_iter()
        .filter(RepoRecord::is_listed)
        .map(RepoRecord::into_project)
        .collect()
}

impl PortfolioClient {
    /// List the configured owner's public repositories as projects.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ListingNotConfigured`] without a request if the
    /// API root or owner is empty, and [`ClientError`] if the HTTP request
    /// fails, the service returns a non-success status, or the response
    /// cannot be parsed.
    pub async fn list_public_repositories(&self) -> Result<Vec<Project>, ClientError> {
        if !self.github.is_configured() {
            return Err(ClientError::ListingNotConfigured);
        }

        let url = format!(
            "{}/users/{}/repos?sort=updated&direction=desc&per_page={}&type=owner",
            self.github.api_url.trim_end_matches('/'),
            urlencoding::encode(&self.github.owner),
            self.github.per_page,
        );

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .timeout(self.timeout);
        if self.github.has_token() {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("token {}", self.github.token),
            );
        }

        let resp = check_response(request.send().await?).await?;
        let records: Vec<RepoRecord> = decode(resp).await?;
        let total = records.len();
        let projects = to_projects(records);
        tracing::debug!(
            owner = %self.github.owner,
            total,
            kept = projects.len(),
            "listed public repositories"
        );
        Ok(projects)
    }
}
