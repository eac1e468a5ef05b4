//! Social links read.

use folio_core::entities::SocialLink;
use folio_core::fallback;

use crate::{PortfolioClient, Resource, Sourced};

impl PortfolioClient {
    /// Social links, or the static links if the backend does not answer or
    /// sends an icon outside the supported set.
    pub async fn social_links(&self) -> Vec<SocialLink> {
        self.social_links_with_origin().await.value
    }

    pub async fn social_links_with_origin(&self) -> Sourced<Vec<SocialLink>> {
        self.read_or_fallback(Resource::SocialLinks, fallback::social_links)
            .await
    }
}
