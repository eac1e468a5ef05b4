//! Integration tests for TOML + env layering.
//!
//! Uses `figment::Jail` for sandboxed env vars and working directory.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use folio_config::{ConfigError, FolioConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://portfolio.example/api"
timeout_secs = 4

[github]
owner = "someone"
per_page = 20
token = "ghp_test"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://portfolio.example/api");
        assert_eq!(config.api.timeout_secs, 4);
        assert_eq!(config.github.owner, "someone");
        assert_eq!(config.github.per_page, 20);
        assert!(config.github.has_token());
        assert_eq!(config.github.api_url, "https://api.github.com");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9000/api"
"#,
        )?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[api]
base_url = "http://from-toml.example/api"
"#,
        )?;
        jail.set_env("FOLIO_API__BASE_URL", "http://from-env.example/api");
        jail.set_env("FOLIO_GITHUB__OWNER", "env-owner");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env.example/api");
        assert_eq!(config.github.owner, "env-owner");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_API__BASE_URL", "localhost:8001");
        let err = FolioConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_API__TIMEOUT_SECS", "soon");
        let err = FolioConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
