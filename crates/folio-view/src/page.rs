//! Whole-page load.

use std::future::Future;

use folio_client::{DataOrigin, PortfolioClient, Sourced};
use folio_core::entities::{Profile, Project, SocialLink, Video};
use serde::Serialize;

use crate::section::{SectionSlot, SectionState};
use crate::timer::ScopedTask;

/// Every section's data, each tagged with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPage {
    pub profile: Sourced<Profile>,
    pub projects: Sourced<Vec<Project>>,
    pub social_links: Sourced<Vec<SocialLink>>,
    pub videos: Sourced<Vec<Video>>,
}

impl PortfolioPage {
    /// Fetch all sections concurrently. Never fails: each section falls back
    /// independently.
    pub async fn load(client: &PortfolioClient) -> Self {
        let (profile, projects, social_links, videos) = tokio::join!(
            client.profile_with_origin(),
            client.projects_with_origin(),
            client.social_links_with_origin(),
            client.videos_with_origin(),
        );

        let page = Self {
            profile,
            projects,
            social_links,
            videos,
        };
        let fallback = page.fallback_sections();
        if !fallback.is_empty() {
            tracing::info!(sections = ?fallback, "page loaded with fallback data");
        }
        page
    }

    /// Names of sections that are showing static data.
    #[must_use]
    pub fn fallback_sections(&self) -> Vec<&'static str> {
        [
            ("profile", self.profile.origin),
            ("projects", self.projects.origin),
            ("social_links", self.social_links.origin),
            ("videos", self.videos.origin),
        ]
        .into_iter()
        .filter(|(_, origin)| *origin == DataOrigin::Static)
        .map(|(name, _)| name)
        .collect()
    }

    #[must_use]
    pub fn is_fully_live(&self) -> bool {
        self.fallback_sections().is_empty()
    }
}

/// Per-section loading state: each section has its own slot, filled by its
/// own read task, and leaves `Loading` as soon as that read resolves.
///
/// Tearing a section down discards its result if it arrives later; dropping
/// the whole value aborts reads still in flight.
#[derive(Debug)]
pub struct PageSections {
    pub profile: SectionSlot<Sourced<Profile>>,
    pub projects: SectionSlot<Sourced<Vec<Project>>>,
    pub social_links: SectionSlot<Sourced<Vec<SocialLink>>>,
    pub videos: SectionSlot<Sourced<Vec<Video>>>,
    tasks: Vec<ScopedTask>,
}

fn spawn_fill<T, F>(slot: &SectionSlot<T>, fetch: F) -> ScopedTask
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let slot = slot.clone();
    ScopedTask::spawn(async move {
        slot.fill(fetch).await;
    })
}

impl PortfolioPage {
    /// Start one read task per section and return their slots immediately.
    #[must_use]
    pub fn spawn_sections(client: &PortfolioClient) -> PageSections {
        let profile = SectionSlot::new();
        let projects = SectionSlot::new();
        let social_links = SectionSlot::new();
        let videos = SectionSlot::new();

        let tasks = vec![
            spawn_fill(&profile, {
                let client = client.clone();
                async move { client.profile_with_origin().await }
            }),
            spawn_fill(&projects, {
                let client = client.clone();
                async move { client.projects_with_origin().await }
            }),
            spawn_fill(&social_links, {
                let client = client.clone();
                async move { client.social_links_with_origin().await }
            }),
            spawn_fill(&videos, {
                let client = client.clone();
                async move { client.videos_with_origin().await }
            }),
        ];

        PageSections {
            profile,
            projects,
            social_links,
            videos,
            tasks,
        }
    }
}

impl PageSections {
    /// Wait until every section's read has resolved.
    pub async fn settle(&mut self) {
        for task in &mut self.tasks {
            task.wait().await;
        }
    }

    /// Tear down every section; results still in flight are discarded.
    pub fn teardown(&self) {
        self.profile.teardown();
        self.projects.teardown();
        self.social_links.teardown();
        self.videos.teardown();
    }

    /// Number of sections still showing a spinner.
    #[must_use]
    pub fn loading_count(&self) -> usize {
        [
            self.profile.is_loading(),
            self.projects.is_loading(),
            self.social_links.is_loading(),
            self.videos.is_loading(),
        ]
        .into_iter()
        .filter(|loading| *loading)
        .count()
    }

    /// The full page, once every section is ready.
    #[must_use]
    pub fn page(&self) -> Option<PortfolioPage> {
        match (
            self.profile.snapshot(),
            self.projects.snapshot(),
            self.social_links.snapshot(),
            self.videos.snapshot(),
        ) {
            (
                SectionState::Ready(profile),
                SectionState::Ready(projects),
                SectionState::Ready(social_links),
                SectionState::Ready(videos),
            ) => Some(PortfolioPage {
                profile,
                projects,
                social_links,
                videos,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folio_config::FolioConfig;
    use folio_core::fallback;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn unreachable_client() -> PortfolioClient {
        let mut config = FolioConfig::default();
        config.api.base_url = "http://127.0.0.1:9/api".to_string();
        config.github.api_url = "http://127.0.0.1:9/gh".to_string();
        PortfolioClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn offline_page_is_entirely_fallback() {
        let page = PortfolioPage::load(&unreachable_client()).await;

        assert_eq!(page.profile.value, fallback::profile());
        assert_eq!(page.projects.value.len(), fallback::projects().len());
        assert_eq!(
            page.fallback_sections(),
            vec!["profile", "projects", "social_links", "videos"]
        );
        assert!(!page.is_fully_live());
    }

    #[test]
    fn live_origins_are_not_reported() {
        let page = PortfolioPage {
            profile: Sourced::new(fallback::profile(), DataOrigin::Backend),
            projects: Sourced::new(fallback::projects(), DataOrigin::PublicListing),
            social_links: Sourced::new(fallback::social_links(), DataOrigin::Static),
            videos: Sourced::new(fallback::videos(), DataOrigin::Backend),
        };
        assert_eq!(page.fallback_sections(), vec!["social_links"]);
    }

    fn client_for(server: &MockServer) -> PortfolioClient {
        let mut config = FolioConfig::default();
        config.api.base_url = format!("{}/api", server.uri());
        config.github.api_url = format!("{}/gh", server.uri());
        PortfolioClient::new(&config).unwrap()
    }

    async fn mount_slow_profile(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "name": "Ada",
                        "title": "Engineer",
                        "bio": "Builds things",
                        "location": "Earth"
                    }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn sections_resolve_independently() {
        let server = MockServer::start().await;
        mount_slow_profile(&server).await;

        let mut sections = PortfolioPage::spawn_sections(&client_for(&server));
        assert!(sections.profile.is_loading());

        sections.settle().await;

        assert_eq!(sections.loading_count(), 0);
        let page = sections.page().unwrap();
        assert_eq!(page.profile.origin, DataOrigin::Backend);
        assert_eq!(page.profile.value.name, "Ada");
        // unmatched backend routes 404, so the other sections fell back
        assert_eq!(page.social_links.origin, DataOrigin::Static);
    }

    #[tokio::test]
    async fn torn_down_section_discards_late_result() {
        let server = MockServer::start().await;
        mount_slow_profile(&server).await;

        let mut sections = PortfolioPage::spawn_sections(&client_for(&server));
        sections.profile.teardown();
        sections.settle().await;

        // the profile read did complete against the backend
        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.iter().any(|r| r.url.path() == "/api/profile"));

        assert!(sections.profile.is_loading());
        assert!(!sections.projects.is_loading());
        assert_eq!(sections.loading_count(), 1);
        assert!(sections.page().is_none());
    }

    #[tokio::test]
    async fn dropping_sections_aborts_reads() {
        let server = MockServer::start().await;
        mount_slow_profile(&server).await;

        let sections = PortfolioPage::spawn_sections(&client_for(&server));
        let profile = sections.profile.clone();
        drop(sections);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(profile.is_loading());
    }
}
