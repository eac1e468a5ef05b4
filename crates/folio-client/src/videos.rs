//! Video reads and the video sync command.

use folio_core::entities::{SyncReport, Video};
use folio_core::fallback;

use crate::{DataOrigin, PortfolioClient, Resource, Sourced, error::ClientError};

impl PortfolioClient {
    /// All videos, or the static videos if the backend does not answer.
    pub async fn videos(&self) -> Vec<Video> {
        self.videos_with_origin().await.value
    }

    pub async fn videos_with_origin(&self) -> Sourced<Vec<Video>> {
        self.read_or_fallback(Resource::Videos, fallback::videos)
            .await
    }

    /// Featured videos. Falls back to the full videos read (which has its own
    /// fallback), not to a filtered static list.
    pub async fn featured_videos(&self) -> Vec<Video> {
        self.featured_videos_with_origin().await.value
    }

    pub async fn featured_videos_with_origin(&self) -> Sourced<Vec<Video>> {
        match self.call(Resource::FeaturedVideos).await {
            Ok(videos) => Sourced::new(videos, DataOrigin::Backend),
            Err(error) => {
                tracing::warn!(
                    resource = %Resource::FeaturedVideos,
                    %error,
                    "read failed, falling back to all videos"
                );
                self.videos_with_origin().await
            }
        }
    }

    /// Ask the backend to refresh its video cache.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on any failure; there is no fallback.
    pub async fn sync_videos(&self) -> Result<SyncReport, ClientError> {
        self.command(Resource::VideoSync).await
    }
}
