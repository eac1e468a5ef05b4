use folio_client::PortfolioClient;
use folio_core::entities::Project;
use folio_view::StaggeredReveal;
use folio_view::clock::month_year;
use folio_view::theme::language_color;
use serde::Serialize;
use tokio::time::Instant;

use crate::cli::root_commands::ProjectsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{Tabular, output, output_rows, render_rows};
use crate::ui;

/// A project card: the full entity in JSON, card fields in a table.
#[derive(Serialize)]
#[serde(transparent)]
pub struct ProjectCard<'a>(pub &'a Project);

impl Tabular for ProjectCard<'_> {
    fn headers() -> &'static [&'static str] {
        &["name", "language", "badge", "stars", "forks", "featured", "updated"]
    }

    fn row(&self) -> Vec<String> {
        let project = self.0;
        vec![
            project.name.clone(),
            project.language.clone().unwrap_or_else(|| "-".to_string()),
            language_color(project.language.as_deref()).to_string(),
            project.stargazers_count.to_string(),
            project.forks_count.to_string(),
            project.is_featured.to_string(),
            month_year(&project.updated_at),
        ]
    }
}

/// Handle `folio projects`.
pub async fn handle(
    args: &ProjectsArgs,
    client: &PortfolioClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sourced = if args.featured {
        client.featured_projects_with_origin().await
    } else {
        client.projects_with_origin().await
    };

    if args.origin && flags.format != OutputFormat::Table {
        return output(&sourced, flags.format);
    }

    let cards = sourced.value.iter().map(ProjectCard).collect::<Vec<_>>();
    if flags.format == OutputFormat::Table && ui::prefs().animate && !cards.is_empty() {
        reveal_table(&render_rows(&cards, flags.format)?).await;
    } else {
        output_rows(&cards, flags.format)?;
    }
    if args.origin {
        println!("origin: {}", sourced.origin);
    }
    Ok(())
}

/// Print the header at once, then card rows one reveal step apart.
async fn reveal_table(table: &str) {
    let reveal = StaggeredReveal::default();
    let start = Instant::now();
    let mut lines = table.lines();
    for line in lines.by_ref().take(2) {
        println!("{line}");
    }
    for (index, line) in lines.enumerate() {
        tokio::time::sleep_until(start + reveal.delay_for(index)).await;
        println!("{line}");
    }
}
