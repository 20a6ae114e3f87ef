//! Site configuration.
//!
//! Layers, lowest priority first: built-in defaults, an optional JSON file,
//! `PIVDOCS_*` environment variables, then CLI flags ([`SiteConfig::apply_cli`]).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ui::DesignVariant;

/// Two years, the minimum accepted by browser HSTS preload lists.
pub const DEFAULT_HSTS_MAX_AGE: u64 = 63_072_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Public origin used for absolute URLs in the sitemap.
    pub site_url: String,
    /// `max-age` of the Strict-Transport-Security header (production only).
    pub hsts_max_age: u64,
    /// Variant shown to visitors without a selection cookie.
    pub default_variant: DesignVariant,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 3000,
            site_url: "http://127.0.0.1:3000".to_string(),
            hsts_max_age: DEFAULT_HSTS_MAX_AGE,
            default_variant: DesignVariant::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Read a JSON config file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `PIVDOCS_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PIVDOCS_ENV") {
            self.environment =
                Environment::parse(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    var: "PIVDOCS_ENV",
                    value,
                    expected: "development or production",
                })?;
        }

        if let Some(value) = lookup("PIVDOCS_HOST") {
            self.host = value;
        }

        if let Some(value) = lookup("PIVDOCS_PORT") {
            self.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PIVDOCS_PORT",
                value,
                expected: "a port number",
            })?;
        }

        if let Some(value) = lookup("PIVDOCS_SITE_URL") {
            self.site_url = value.trim_end_matches('/').to_string();
        }

        if let Some(value) = lookup("PIVDOCS_HSTS_MAX_AGE") {
            self.hsts_max_age = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PIVDOCS_HSTS_MAX_AGE",
                value,
                expected: "a number of seconds",
            })?;
        }

        if let Some(value) = lookup("PIVDOCS_DEFAULT_VARIANT") {
            self.default_variant =
                DesignVariant::from_slug(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    var: "PIVDOCS_DEFAULT_VARIANT",
                    value,
                    expected: "aurora, blueprint, paper or midnight",
                })?;
        }

        Ok(())
    }

    /// Apply `serve` flags. `production` only ever turns production on.
    pub fn apply_cli(&mut self, host: Option<String>, port: Option<u16>, production: bool) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if production {
            self.environment = Environment::Production;
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_development() {
        let config = SiteConfig::default();
        assert!(!config.is_production());
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.hsts_max_age, DEFAULT_HSTS_MAX_AGE);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = SiteConfig::default();
        config
            .apply_env(lookup_from(&[
                ("PIVDOCS_ENV", "Prod"),
                ("PIVDOCS_PORT", "8080"),
                ("PIVDOCS_SITE_URL", "https://piv.example.org/"),
                ("PIVDOCS_DEFAULT_VARIANT", "midnight"),
            ]))
            .unwrap();

        assert!(config.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_url, "https://piv.example.org");
        assert_eq!(config.default_variant, DesignVariant::Midnight);
    }

    #[test]
    fn invalid_env_value_is_an_error() {
        let mut config = SiteConfig::default();
        let err = config
            .apply_env(lookup_from(&[("PIVDOCS_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PIVDOCS_PORT"));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let mut config = SiteConfig::default();
        let result = config.apply_env(lookup_from(&[("PIVDOCS_ENV", "staging")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv {
                var: "PIVDOCS_ENV",
                ..
            })
        ));
    }

    #[test]
    fn file_with_partial_fields_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"environment": "production", "port": 9000}}"#).unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert!(config.is_production());
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_variant, DesignVariant::Aurora);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port = 9000").unwrap();

        let result = SiteConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn cli_flags_override_env_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"host": "10.0.0.1", "port": 9000, "site_url": "https://file.example"}}"#
        )
        .unwrap();

        let mut config = SiteConfig::from_file(file.path()).unwrap();
        config
            .apply_env(lookup_from(&[
                ("PIVDOCS_PORT", "9100"),
                ("PIVDOCS_HOST", "10.0.0.2"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "10.0.0.2:9100");

        config.apply_cli(None, Some(9200), true);
        assert_eq!(config.bind_addr(), "10.0.0.2:9200");
        assert!(config.is_production());
        assert_eq!(config.site_url, "https://file.example");

        config.apply_cli(Some("0.0.0.0".to_string()), None, false);
        assert_eq!(config.bind_addr(), "0.0.0.0:9200");
        assert!(config.is_production());
    }
}
