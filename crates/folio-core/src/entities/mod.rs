//! Entity structs for every resource the portfolio renders.
//!
//! All entities are immutable snapshots of one fetch. Nothing here is
//! persisted or mutated client-side.

mod profile;
mod project;
mod social;
mod system;
mod video;

pub use profile::Profile;
pub use project::Project;
pub use social::{SocialIcon, SocialLink};
pub use system::{HealthReport, ProjectStats, SyncReport};
pub use video::Video;
