use folio_client::PortfolioClient;
use folio_core::entities::SocialLink;
use folio_view::theme::platform_stats;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{Tabular, output_rows};

#[derive(Serialize)]
#[serde(transparent)]
struct SocialCard<'a>(&'a SocialLink);

impl Tabular for SocialCard<'_> {
    fn headers() -> &'static [&'static str] {
        &["icon", "name", "audience", "url"]
    }

    fn row(&self) -> Vec<String> {
        let link = self.0;
        vec![
            link.icon.glyph().to_string(),
            link.name.clone(),
            platform_stats(&link.name).to_string(),
            link.url.clone(),
        ]
    }
}

/// Handle `folio social`. Links are shown in their `order`.
pub async fn handle(client: &PortfolioClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut links = client.social_links().await;
    links.sort_by_key(|link| link.order);
    let cards = links.iter().map(SocialCard).collect::<Vec<_>>();
    output_rows(&cards, flags.format)
}
