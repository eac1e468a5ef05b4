//! Projects reads (tiered) and project commands.

use folio_core::entities::{Project, ProjectStats, SyncReport};
use folio_core::fallback;

use crate::{
    DataOrigin, PortfolioClient, ProjectScope, ProjectTier, Resource, Sourced,
    error::ClientError,
};

impl PortfolioClient {
    /// All projects, from the first tier that answers.
    pub async fn projects(&self) -> Vec<Project> {
        self.projects_with_origin().await.value
    }

    pub async fn projects_with_origin(&self) -> Sourced<Vec<Project>> {
        self.resolve_projects(ProjectScope::All).await
    }

    /// Featured projects, from the first tier that answers.
    pub async fn featured_projects(&self) -> Vec<Project> {
        self.featured_projects_with_origin().await.value
    }

    pub async fn featured_projects_with_origin(&self) -> Sourced<Vec<Project>> {
        self.resolve_projects(ProjectScope::Featured).await
    }

    /// Walk the configured tiers in order and return the first success.
    ///
    /// If every tier fails (only possible with a chain that omits
    /// [`ProjectTier::Static`]), the static list is served anyway.
    pub async fn resolve_projects(&self, scope: ProjectScope) -> Sourced<Vec<Project>> {
        for &tier in &self.project_tiers {
            match self.fetch_tier(tier, scope).await {
                Ok(projects) => {
                    tracing::debug!(%tier, count = projects.len(), "project tier answered");
                    return Sourced::new(projects, tier.origin());
                }
                Err(error) => {
                    tracing::warn!(%tier, %error, "project tier failed, trying next");
                }
            }
        }

        tracing::warn!("every project tier failed, serving fallback data");
        Sourced::new(scope.narrow(fallback::projects()), DataOrigin::Static)
    }

    /// Run a single tier.
    ///
    /// # Errors
    ///
    /// Returns the tier's [`ClientError`]; [`ProjectTier::Static`] never
    /// fails.
    pub async fn fetch_tier(
        &self,
        tier: ProjectTier,
        scope: ProjectScope,
    ) -> Result<Vec<Project>, ClientError> {
        match tier {
            ProjectTier::Backend => {
                let projects: Vec<Project> = self.call(scope.resource()).await?;
                Ok(projects
                    .into_iter()
                    .map(Project::with_featured_recomputed)
                    .collect())
            }
            ProjectTier::PublicListing => {
                let projects = self.list_public_repositories().await?;
                Ok(scope.narrow(projects))
            }
            ProjectTier::Static => Ok(scope.narrow(fallback::projects())),
        }
    }

    /// Ask the backend to re-sync projects from the source-hosting service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on any failure; there is no fallback.
    pub async fn sync_projects(&self) -> Result<SyncReport, ClientError> {
        self.command(Resource::ProjectSync).await
    }

    /// Project counts and cache freshness.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on any failure; there is no fallback.
    pub async fn project_stats(&self) -> Result<ProjectStats, ClientError> {
        self.command(Resource::ProjectStats).await
    }
}
