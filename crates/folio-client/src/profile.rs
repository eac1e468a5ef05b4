//! Profile read.

use folio_core::entities::Profile;
use folio_core::fallback;

use crate::{PortfolioClient, Resource, Sourced};

impl PortfolioClient {
    /// The profile, or the static profile if the backend does not answer.
    pub async fn profile(&self) -> Profile {
        self.profile_with_origin().await.value
    }

    pub async fn profile_with_origin(&self) -> Sourced<Profile> {
        self.read_or_fallback(Resource::Profile, fallback::profile)
            .await
    }
}
