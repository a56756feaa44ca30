//! # Application configuration (`Fiscalis.toml`)
//!
//! Build-time configuration for the front end. The web binary embeds the file
//! and parses it on startup; a missing section or key falls back to its
//! default, so an empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""          # backend origin; empty = same origin as the page
//!
//! [preferences]
//! theme = "dark"         # "light" | "dark"
//! language = "en"        # "en" | "pt"
//! persist = false        # keep theme/language in browser local storage
//!
//! [logging]
//! level = "info"         # trace | debug | info | warn | error
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FiscalisConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Where outbound requests go; [`ApiConfig::endpoint`] joins paths onto the base URL. |
//! | [`PreferencesConfig`] | Startup theme and language, and whether they persist across sessions. |
//! | [`LoggingConfig`] | Log level handed to the tracing subscriber. |
//!
//! Malformed input is reported as [`ConfigError`]; callers fall back to the
//! default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preferences::{Language, Preferences, Theme};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid Fiscalis.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot write Fiscalis.toml: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `Fiscalis.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FiscalisConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend, without a trailing path. Empty means the page's
    /// own origin.
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for `path` (which starts with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
    /// Off by default: every load starts from `theme`/`language`.
    #[serde(default)]
    pub persist: bool,
}

impl PreferencesConfig {
    pub fn initial(&self) -> Preferences {
        Preferences::new(self.theme, self.language)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl FiscalisConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Fiscalis.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = FiscalisConfig::from_toml("").unwrap();
        assert_eq!(config, FiscalisConfig::default());
        assert_eq!(config.preferences.initial(), Preferences::default());
        assert!(!config.preferences.persist);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = FiscalisConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8000/"

            [preferences]
            language = "pt"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.endpoint("/expenses"), "http://localhost:8000/expenses");
        assert_eq!(config.preferences.language, Language::Pt);
        assert_eq!(config.preferences.theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = FiscalisConfig::from_toml("[preferences]\nlanguage = \"fr\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_same_origin_endpoint() {
        assert_eq!(ApiConfig::default().endpoint("/login"), "/login");
    }

    #[test]
    fn test_round_trip() {
        let mut config = FiscalisConfig::default();
        config.preferences.persist = true;
        config.preferences.theme = Theme::Light;
        let toml = config.to_toml().unwrap();
        assert_eq!(FiscalisConfig::from_toml(&toml).unwrap(), config);
    }
}
