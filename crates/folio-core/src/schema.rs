//! JSON schemas for the entity types, looked up by name.

use schemars::schema_for;

use crate::entities::{
    HealthReport, Profile, Project, ProjectStats, SocialLink, SyncReport, Video,
};
use crate::errors::CoreError;

/// Type names accepted by [`schema_for_type`].
pub const TYPE_NAMES: &[&str] = &[
    "profile",
    "project",
    "social_link",
    "video",
    "health_report",
    "sync_report",
    "project_stats",
];

/// Generate the JSON schema for an entity type.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSchemaType`] if `name` is not one of
/// [`TYPE_NAMES`] (dashes are accepted in place of underscores).
pub fn schema_for_type(name: &str) -> Result<serde_json::Value, CoreError> {
    let schema = match name.replace('-', "_").as_str() {
        "profile" => schema_for!(Profile),
        "project" => schema_for!(Project),
        "social_link" => schema_for!(SocialLink),
        "video" => schema_for!(Video),
        "health_report" => schema_for!(HealthReport),
        "sync_report" => schema_for!(SyncReport),
        "project_stats" => schema_for!(ProjectStats),
        _ => return Err(CoreError::UnknownSchemaType(name.to_string())),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPE_NAMES {
            let schema = schema_for_type(name).unwrap();
            assert!(schema.is_object(), "{name}");
        }
    }

    #[test]
    fn dashes_are_accepted() {
        assert!(schema_for_type("social-link").is_ok());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = schema_for_type("genome").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSchemaType(_)));
        assert!(err.to_string().contains("project"));
    }
}
