//! Static presentation lookups.

/// Badge colour for a project language. Unknown or missing languages are
/// grey.
#[must_use]
pub fn language_color(language: Option<&str>) -> &'static str {
    match language {
        Some("JavaScript") => "yellow-500",
        Some("Python") => "blue-500",
        Some("TypeScript") => "blue-400",
        Some("C#") => "purple-500",
        Some("Java") => "orange-500",
        Some("Go") => "cyan-500",
        Some("Rust") => "orange-600",
        _ => "gray-500",
    }
}

/// Audience figure shown under a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PlatformStats {
    pub followers: &'static str,
    pub label: &'static str,
}

impl Default for PlatformStats {
    fn default() -> Self {
        Self {
            followers: "1K+",
            label: "Followers",
        }
    }
}

impl std::fmt::Display for PlatformStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.followers, self.label)
    }
}

/// Stats keyed by the link's display name.
#[must_use]
pub fn platform_stats(name: &str) -> PlatformStats {
    let (followers, label) = match name {
        "GitHub" => ("2.3K", "Followers"),
        "LinkedIn" => ("5.7K", "Connections"),
        "YouTube" => ("12.4K", "Subscribers"),
        "Twitch" => ("3.8K", "Followers"),
        _ => return PlatformStats::default(),
    };
    PlatformStats { followers, label }
}
