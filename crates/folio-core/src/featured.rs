//! Featured-project classification.
//!
//! A repository is featured when any rule fires, checked in order:
//!
//! ```text
//! 1. stars >= 10 or forks >= 5                     → Popular
//! 2. a topic (case-insensitive) is in FEATURED_TOPICS → Topic
//! 3. lowercased name contains a FEATURED_NAME_PATTERNS entry → NamePattern
//! ```
//!
//! Rule 3 is plain substring matching, so short patterns over-match:
//! `"claim"`, `"train"` and `"plain-utils"` contain `"ai"`, `"html"` contains
//! `"ml"`. That imprecision is part of the heuristic and kept for
//! compatibility with the backend's flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum star count that makes a repository featured on its own.
pub const STAR_THRESHOLD: u32 = 10;

/// Minimum fork count that makes a repository featured on its own.
pub const FORK_THRESHOLD: u32 = 5;

/// Topic tags that mark a repository as featured.
pub const FEATURED_TOPICS: &[&str] = &[
    "ai",
    "machine-learning",
    "neural-network",
    "quantum",
    "blockchain",
    "cyberpunk",
];

/// Substrings of the lowercased repository name that mark it as featured.
pub const FEATURED_NAME_PATTERNS: &[&str] = &["ai", "quantum", "neural", "cyber", "bot", "ml"];

/// The classifier's view of a repository.
#[derive(Debug, Clone, Copy)]
pub struct RepoSignals<'a> {
    pub name: &'a str,
    pub stars: u32,
    pub forks: u32,
    pub topics: &'a [String],
}

/// Which rule made a repository featured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum FeaturedReason {
    /// Star or fork count met its threshold.
    Popular { stars: u32, forks: u32 },
    /// A topic tag matched.
    Topic { topic: String },
    /// The name contained a pattern.
    NamePattern { pattern: String },
}

impl fmt::Display for FeaturedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular { stars, forks } => write!(f, "popular ({stars} stars, {forks} forks)"),
            Self::Topic { topic } => write!(f, "topic '{topic}'"),
            Self::NamePattern { pattern } => write!(f, "name contains '{pattern}'"),
        }
    }
}

impl RepoSignals<'_> {
    /// Return the first rule that fires, or `None` when the repository is
    /// not featured.
    #[must_use]
    pub fn reason(&self) -> Option<FeaturedReason> {
        if self.stars >= STAR_THRESHOLD || self.forks >= FORK_THRESHOLD {
            return Some(FeaturedReason::Popular {
                stars: self.stars,
                forks: self.forks,
            });
        }

        if let Some(topic) = self.topics.iter().find(|topic| {
            let lowered = topic.to_lowercase();
            FEATURED_TOPICS.contains(&lowered.as_str())
        }) {
            return Some(FeaturedReason::Topic {
                topic: topic.clone(),
            });
        }

        let name = self.name.to_lowercase();
        FEATURED_NAME_PATTERNS
            .iter()
            .find(|pattern| name.contains(**pattern))
            .map(|pattern| FeaturedReason::NamePattern {
                pattern: (*pattern).to_string(),
            })
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.reason().is_some()
    }
}
