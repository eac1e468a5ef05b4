use folio_client::{DataOrigin, PortfolioClient};
use folio_view::PortfolioPage;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{Tabular, output, output_rows};

#[derive(Serialize)]
struct SectionRow {
    section: &'static str,
    origin: DataOrigin,
    items: usize,
}

impl Tabular for SectionRow {
    fn headers() -> &'static [&'static str] {
        &["section", "origin", "items"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.section.to_string(),
            self.origin.to_string(),
            self.items.to_string(),
        ]
    }
}

fn summarize(page: &PortfolioPage) -> Vec<SectionRow> {
    vec![
        SectionRow {
            section: "profile",
            origin: page.profile.origin,
            items: 1,
        },
        SectionRow {
            section: "projects",
            origin: page.projects.origin,
            items: page.projects.value.len(),
        },
        SectionRow {
            section: "social_links",
            origin: page.social_links.origin,
            items: page.social_links.value.len(),
        },
        SectionRow {
            section: "videos",
            origin: page.videos.origin,
            items: page.videos.value.len(),
        },
    ]
}

/// Handle `folio page`: the whole page in JSON, a per-section summary as a
/// table.
pub async fn handle(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = PortfolioPage::load(client).await;
    match flags.format {
        OutputFormat::Table => output_rows(&summarize(&page), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&page, flags.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_client::Sourced;
    use folio_core::fallback;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_counts_items_per_section() {
        let page = PortfolioPage {
            profile: Sourced::new(fallback::profile(), DataOrigin::Backend),
            projects: Sourced::new(fallback::projects(), DataOrigin::PublicListing),
            social_links: Sourced::new(fallback::social_links(), DataOrigin::Static),
            videos: Sourced::new(Vec::new(), DataOrigin::Backend),
        };
        let rows = summarize(&page);

        assert_eq!(rows[1].items, fallback::projects().len());
        assert_eq!(rows[1].origin, DataOrigin::PublicListing);
        assert_eq!(rows[2].row()[1], "static");
        assert_eq!(rows[3].items, 0);
    }
}
