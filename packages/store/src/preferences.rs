//! # Display preferences: theme and language
//!
//! The two pieces of process-wide UI state. Both are closed two-value enums so
//! every mutation is total: [`Theme::toggled`] and [`Language::toggled`] always
//! land on the other variant.
//!
//! Parsing from strings (config files, local storage, `<select>` values) goes
//! through [`FromStr`] and fails with [`PreferenceError`] for anything outside
//! the enum.
//!
//! [`PreferenceStore`] is the persistence seam. It mirrors the object store
//! pattern used elsewhere: reads return `None` on any failure and writes are
//! best effort, so a broken storage backend degrades to "defaults on every
//! load" rather than an error path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("unsupported theme: {0}")]
    UnsupportedTheme(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Color scheme applied to the whole application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class name placed on the document root element.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferenceError::UnsupportedTheme(other.to_string())),
        }
    }
}

/// Language of every translated string on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(PreferenceError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Theme and language together, as persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
}

impl Preferences {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self { theme, language }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}

/// Storage backend for [`Preferences`].
pub trait PreferenceStore {
    /// Previously saved preferences, or `None` if nothing usable is stored.
    fn load(&self) -> Option<Preferences>;

    /// Persist preferences. Failures are logged and otherwise ignored.
    fn save(&self, preferences: &Preferences);
}
