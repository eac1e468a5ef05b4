use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Icons the social section can draw.
///
/// The set is closed: a link whose icon is not listed here fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Youtube,
    Twitch,
}

impl SocialIcon {
    pub const ALL: [Self; 4] = [Self::Github, Self::Linkedin, Self::Youtube, Self::Twitch];

    /// Return the identifier used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Linkedin => "Linkedin",
            Self::Youtube => "Youtube",
            Self::Twitch => "Twitch",
        }
    }

    /// Short glyph used when drawing the icon in a terminal.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Github => "[gh]",
            Self::Linkedin => "[in]",
            Self::Youtube => "[yt]",
            Self::Twitch => "[tw]",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialIcon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownIcon(s.to_string()))
    }
}

/// A link to one of the person's profiles elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SocialLink {
    /// Platform display name (`GitHub`, `LinkedIn`, ...).
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
    /// Display position; lower first.
    #[serde(default)]
    pub order: u32,
}
