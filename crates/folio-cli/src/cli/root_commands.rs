use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the profile.
    Profile,
    /// List projects.
    Projects(ProjectsArgs),
    /// Ask the backend to re-sync projects.
    ProjectsSync,
    /// Project counts and cache freshness.
    ProjectsStats,
    /// List social links.
    Social,
    /// List videos.
    Videos(VideosArgs),
    /// Ask the backend to re-sync videos.
    VideosSync,
    /// Backend health.
    Health,
    /// Re-sync every external source.
    SyncAll,
    /// Backend database counts.
    SystemStats,
    /// Load every section at once and report where each came from.
    Page,
    /// Run the featured classifier on a repository description.
    Classify(ClassifyArgs),
    /// Print the JSON schema of an entity type.
    Schema(SchemaArgs),
    /// Animated title banner with the footer clock.
    Banner(BannerArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Only featured projects.
    #[arg(long)]
    pub featured: bool,

    /// Include which source answered (backend, public_listing, static).
    #[arg(long)]
    pub origin: bool,
}

#[derive(Clone, Debug, Args)]
pub struct VideosArgs {
    /// Only featured videos.
    #[arg(long)]
    pub featured: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Repository name.
    pub name: String,

    #[arg(long, default_value_t = 0)]
    pub stars: u32,

    #[arg(long, default_value_t = 0)]
    pub forks: u32,

    /// Topic tag (repeatable).
    #[arg(long = "topic")]
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type, e.g. `project` or `social-link`.
    pub type_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct BannerArgs {
    /// How long to animate.
    #[arg(long, default_value_t = 10)]
    pub seconds: u64,

    /// Trigger a glitch immediately instead of waiting for the random trigger.
    #[arg(long)]
    pub glitch_now: bool,
}
