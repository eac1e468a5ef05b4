use folio_client::PortfolioClient;
use folio_core::entities::Video;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VideosArgs;
use crate::output::{Tabular, output_rows};

#[derive(Serialize)]
#[serde(transparent)]
struct VideoCard<'a>(&'a Video);

impl Tabular for VideoCard<'_> {
    fn headers() -> &'static [&'static str] {
        &["title", "views", "duration", "featured", "watch"]
    }

    fn row(&self) -> Vec<String> {
        let video = self.0;
        vec![
            video.title.clone(),
            video.views.clone(),
            video.duration.clone(),
            video.is_featured.to_string(),
            video.watch_url(),
        ]
    }
}

/// Handle `folio videos`.
pub async fn handle(
    args: &VideosArgs,
    client: &PortfolioClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let videos = if args.featured {
        client.featured_videos().await
    } else {
        client.videos().await
    };
    let cards = videos.iter().map(VideoCard).collect::<Vec<_>>();
    output_rows(&cards, flags.format)
}
