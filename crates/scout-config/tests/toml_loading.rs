//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use scout_config::ScoutConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.example.com/api/v1"
token = "secret-token"
timeout_secs = 90
"#,
        )?;

        let config: ScoutConfig = Figment::from(Serialized::defaults(ScoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.api.token, "secret-token");
        assert_eq!(config.api.timeout_secs, 90);
        assert!(config.api.is_configured());
        Ok(())
    });
}

#[test]
fn loads_research_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[research]
poll_interval_ms = 2000
poll_retries = 5
retry_backoff_ms = 250
cache_ttl_secs = 60
"#,
        )?;

        let config: ScoutConfig = Figment::from(Serialized::defaults(ScoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.research.poll_interval_ms, 2000);
        assert_eq!(config.research.poll_retries, 5);
        assert_eq!(config.research.retry_backoff_ms, 250);
        assert_eq!(config.research.cache_ttl_secs, 60);
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.example.com/api/v1"
token = "tok"

[research]
poll_interval_ms = 1000

[general]
default_limit = 50
default_max_results = 10
"#,
        )?;

        let config: ScoutConfig = Figment::from(Serialized::defaults(ScoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.api.is_configured());
        assert_eq!(config.research.poll_interval_ms, 1000);
        // Unspecified fields keep their defaults.
        assert_eq!(config.research.poll_retries, 3);
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_max_results, 10);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("SCOUT_API__BASE_URL", "https://from-env.example.com");

        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example.com"
token = "toml-token"
"#,
        )?;

        let config: ScoutConfig = Figment::from(Serialized::defaults(ScoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SCOUT_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.api.base_url, "https://from-env.example.com");
        // TOML value not overridden by env should remain
        assert_eq!(config.api.token, "toml-token");
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SCOUT_API__BASE_URLL", "https://typo.example.com");

        let config: ScoutConfig = Figment::from(Serialized::defaults(ScoutConfig::default()))
            .merge(Env::prefixed("SCOUT_").split("__"))
            .extract()?;

        assert!(
            config.api.base_url.is_empty(),
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
