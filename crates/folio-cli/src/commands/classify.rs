use folio_core::{FeaturedReason, RepoSignals};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    name: String,
    featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<FeaturedReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

fn classify(args: &ClassifyArgs) -> ClassifyResponse {
    let reason = RepoSignals {
        name: &args.name,
        stars: args.stars,
        forks: args.forks,
        topics: &args.topics,
    }
    .reason();

    ClassifyResponse {
        name: args.name.clone(),
        featured: reason.is_some(),
        explanation: reason.as_ref().map(ToString::to_string),
        reason,
    }
}

/// Handle `folio classify`. Runs offline.
pub fn handle(args: &ClassifyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&classify(args), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, stars: u32, topics: &[&str]) -> ClassifyArgs {
        ClassifyArgs {
            name: name.to_string(),
            stars,
            forks: 0,
            topics: topics.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn plain_repository_is_not_featured() {
        let response = classify(&args("dotfiles", 2, &[]));
        assert!(!response.featured);
        assert!(response.reason.is_none());
    }

    #[test]
    fn topic_match_is_explained() {
        let response = classify(&args("dotfiles", 0, &["Blockchain"]));
        assert!(response.featured);
        assert_eq!(response.explanation.as_deref(), Some("topic 'Blockchain'"));
    }

    #[test]
    fn response_json_carries_rule_tag() {
        let response = classify(&args("website", 12, &[]));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["reason"]["rule"], "popular");
        assert_eq!(value["reason"]["stars"], 12);
    }
}
