use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_util::{display_count, string_or_number};

/// A video card.
///
/// Accepts both the backend shape (`youtube_id`, numeric `view_count`) and the
/// page's display shape (`videoId`, `views: "25K"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Video {
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Identifier on the external video host.
    #[serde(alias = "videoId", alias = "youtube_id")]
    pub video_id: String,
    /// View count as displayed (`25K`).
    #[serde(alias = "view_count", deserialize_with = "display_count")]
    #[schemars(with = "String")]
    pub views: String,
    /// Duration as displayed (`15:32`).
    pub duration: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl Video {
    /// Watch URL on the external host.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}
