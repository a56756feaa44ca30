use std::sync::{Arc, Mutex};

use crate::preferences::{PreferenceStore, Preferences};

/// In-memory PreferenceStore for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<Preferences> {
        *self.slot.lock().ok()?
    }

    fn save(&self, preferences: &Preferences) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(*preferences);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{Language, Theme};

    #[test]
    fn test_empty_store_loads_nothing() {
        assert!(MemoryPreferenceStore::new().load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryPreferenceStore::new();
        let prefs = Preferences::new(Theme::Light, Language::Pt);
        store.save(&prefs);
        assert_eq!(store.load(), Some(prefs));

        // Clones share the slot
        let other = store.clone();
        other.save(&Preferences::default());
        assert_eq!(store.load(), Some(Preferences::default()));
    }
}
