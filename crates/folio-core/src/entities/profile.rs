use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The person the portfolio presents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    /// Ordered as displayed in the about section.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Ordered as displayed in the tool strip.
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_channel_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_payload_decodes_and_ignores_storage_fields() {
        let json = r#"{
            "id": "0b7c",
            "name": "Ada",
            "title": "Engineer",
            "bio": "Builds things",
            "location": "Earth",
            "specialties": ["AI Tools"],
            "tools": ["Rust", "Python"],
            "github_username": "ada",
            "created_at": "2024-01-01T00:00:00"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.tools, vec!["Rust", "Python"]);
        assert_eq!(profile.github_username.as_deref(), Some("ada"));
        assert!(profile.youtube_channel_id.is_none());
    }

    #[test]
    fn missing_required_field_fails() {
        let json = r#"{"name": "Ada", "title": "Engineer"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }
}
