//! Command endpoints. These fail instead of falling back, and a failure
//! exits non-zero.

use anyhow::Context;
use folio_client::PortfolioClient;
use folio_core::entities::SyncReport;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `folio health`.
pub async fn health(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = client.health().await.context("backend health check failed")?;
    output(&report, flags.format)
}

/// Handle `folio system-stats`.
pub async fn system_stats(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = client
        .system_stats()
        .await
        .context("failed to read system stats")?;
    output(&stats, flags.format)
}

/// Handle `folio projects-stats`.
pub async fn projects_stats(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = client
        .project_stats()
        .await
        .context("failed to read project stats")?;
    output(&stats, flags.format)
}

/// Handle `folio projects-sync`.
pub async fn projects_sync(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = client
        .sync_projects()
        .await
        .context("project sync failed")?;
    report_sync(&report, flags)
}

/// Handle `folio videos-sync`.
pub async fn videos_sync(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = client.sync_videos().await.context("video sync failed")?;
    report_sync(&report, flags)
}

/// Handle `folio sync-all`.
pub async fn sync_all(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = client.sync_all().await.context("sync-all failed")?;
    report_sync(&report, flags)
}

/// A reachable backend that reports `success: false` is still a completed
/// call; the report is printed and the errors are logged.
fn report_sync(report: &SyncReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !report.success {
        tracing::warn!(errors = ?report.errors, "{}", report.message);
    }
    output(report, flags.format)
}
