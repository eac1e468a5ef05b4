//! Public source-hosting listing configuration (the second read tier for
//! projects).

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_owner() -> String {
    "Kenan-Alnaser".to_string()
}

/// Page size of the listing request.
const fn default_per_page() -> u32 {
    50
}

fn default_user_agent() -> String {
    "folio/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// API root. Overridable so tests can point it at a local server.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Account whose repositories are listed.
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Optional token. Unauthenticated calls work but are rate limited harder.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            owner: default_owner(),
            per_page: default_per_page(),
            token: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl GithubConfig {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether the listing tier can run at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.owner.is_empty()
    }
}
