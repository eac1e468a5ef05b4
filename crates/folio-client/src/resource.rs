//! Backend endpoints.

use std::fmt;

/// Every backend endpoint the client calls.
///
/// Reads serve fallback data on failure; commands propagate the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Profile,
    Projects,
    FeaturedProjects,
    ProjectStats,
    ProjectSync,
    SocialLinks,
    Videos,
    FeaturedVideos,
    VideoSync,
    Health,
    SystemStats,
    SyncAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Resource {
    /// Path relative to the configured base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Profile => "/profile",
            Self::Projects => "/projects",
            Self::FeaturedProjects => "/projects/featured",
            Self::ProjectStats => "/projects/stats",
            Self::ProjectSync => "/projects/sync",
            Self::SocialLinks => "/social-links",
            Self::Videos => "/videos",
            Self::FeaturedVideos => "/videos/featured",
            Self::VideoSync => "/videos/sync",
            Self::Health => "/system/health",
            Self::SystemStats => "/system/stats",
            Self::SyncAll => "/system/sync-all",
        }
    }

    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::ProjectSync | Self::VideoSync | Self::SyncAll => Method::Post,
            _ => Method::Get,
        }
    }

    /// Commands surface failures instead of falling back.
    #[must_use]
    pub const fn is_command(self) -> bool {
        matches!(
            self,
            Self::ProjectSync
                | Self::VideoSync
                | Self::SyncAll
                | Self::Health
                | Self::SystemStats
                | Self::ProjectStats
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Projects => "projects",
            Self::FeaturedProjects => "featured_projects",
            Self::ProjectStats => "project_stats",
            Self::ProjectSync => "project_sync",
            Self::SocialLinks => "social_links",
            Self::Videos => "videos",
            Self::FeaturedVideos => "featured_videos",
            Self::VideoSync => "video_sync",
            Self::Health => "health",
            Self::SystemStats => "system_stats",
            Self::SyncAll => "sync_all",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
