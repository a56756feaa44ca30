//! # Local storage preference store
//!
//! [`LocalPreferenceStore`] keeps [`Preferences`] as a JSON string under a
//! single `localStorage` key. It is only used when
//! `preferences.persist = true` in the configuration.
//!
//! Reads swallow every failure (no window, storage disabled, malformed JSON)
//! and return `None`, so the app starts from its configured defaults. Writes
//! log at `warn` and carry on.

use crate::preferences::{PreferenceStore, Preferences};

const DEFAULT_KEY: &str = "fiscalis.preferences";

#[derive(Clone, Debug)]
pub struct LocalPreferenceStore {
    key: String,
}

impl Default for LocalPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalPreferenceStore {
    pub fn new() -> Self {
        Self { key: DEFAULT_KEY.to_string() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<Preferences> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(preferences) => Some(preferences),
            Err(e) => {
                tracing::warn!("Ignoring stored preferences: {e}");
                None
            }
        }
    }

    fn save(&self, preferences: &Preferences) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("Local storage unavailable, preferences not saved");
            return;
        };
        match serde_json::to_string(preferences) {
            Ok(raw) => {
                if storage.set_item(&self.key, &raw).is_err() {
                    tracing::warn!("Failed to write preferences to local storage");
                }
            }
            Err(e) => tracing::warn!("Failed to encode preferences: {e}"),
        }
    }
}
