//! Ordered data sources for the projects read.
//!
//! ```text
//! Backend ──fail──▶ PublicListing ──fail──▶ Static
//! ```
//!
//! Each tier returns a result or a failure; the first success wins. `Static`
//! cannot fail, so the default chain always produces a list.

use std::fmt;

use folio_core::entities::Project;

use crate::{DataOrigin, Resource};

/// One source of project data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectTier {
    /// The portfolio backend.
    Backend,
    /// The public repository listing of the configured owner.
    PublicListing,
    /// Built-in project list.
    Static,
}

/// The order tiers are tried in unless a caller replaces it.
pub const DEFAULT_PROJECT_TIERS: [ProjectTier; 3] = [
    ProjectTier::Backend,
    ProjectTier::PublicListing,
    ProjectTier::Static,
];

impl ProjectTier {
    #[must_use]
    pub const fn origin(self) -> DataOrigin {
        match self {
            Self::Backend => DataOrigin::Backend,
            Self::PublicListing => DataOrigin::PublicListing,
            Self::Static => DataOrigin::Static,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::PublicListing => "public_listing",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for ProjectTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which project list is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    All,
    Featured,
}

impl ProjectScope {
    /// Backend endpoint for this scope.
    #[must_use]
    pub const fn resource(self) -> Resource {
        match self {
            Self::All => Resource::Projects,
            Self::Featured => Resource::FeaturedProjects,
        }
    }

    /// Narrow a full list to this scope. The backend filters server-side;
    /// the listing and static tiers filter here.
    #[must_use]
    pub fn narrow(self, projects: Vec<Project>) -> Vec<Project> {
        match self {
            Self::All => projects,
            Self::Featured => projects.into_iter().filter(|p| p.is_featured).collect(),
        }
    }
}
