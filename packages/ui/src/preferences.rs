//! Theme and language contexts.
//!
//! Both live at the root of the tree and are read by every visual component.
//! The only way to change them is through [`ThemeContext::toggle`] and
//! [`LanguageContext::set`] / [`LanguageContext::toggle`].

use std::rc::Rc;

use dioxus::prelude::*;
use store::config::PreferencesConfig;
use store::{Language, PreferenceStore, Preferences, Text, Theme};

/// Current theme and its toggle.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggled();
        tracing::debug!("Theme -> {next}");
        self.theme.set(next);
    }
}

/// Current language, its setter, and translation lookup.
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageContext {
    language: Signal<Language>,
}

impl LanguageContext {
    pub fn get(&self) -> Language {
        (self.language)()
    }

    pub fn set(&mut self, language: Language) {
        tracing::debug!("Language -> {language}");
        self.language.set(language);
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggled();
        self.set(next);
    }

    /// Translate `key` into the active language.
    pub fn text(&self, key: Text) -> &'static str {
        self.get().text(key)
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
}

/// Put the active theme's class on the document root so CSS can select on it.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            for other in Theme::ALL {
                if let Err(e) = classes.remove_1(other.class_name()) {
                    tracing::debug!("Failed to remove theme class {}: {e:?}", other.class_name());
                }
            }
            if let Err(e) = classes.add_1(theme.class_name()) {
                tracing::debug!("Failed to add theme class {}: {e:?}", theme.class_name());
            }
        }
    }
    tracing::debug!("Applied theme class {}", theme.class_name());
}

#[component]
pub fn ThemeProvider(initial: Theme, children: Element) -> Element {
    let theme = use_signal(|| initial);
    use_context_provider(|| ThemeContext { theme });

    use_effect(move || apply_theme(theme()));

    rsx! {
        {children}
    }
}

#[component]
pub fn LanguageProvider(initial: Language, children: Element) -> Element {
    let language = use_signal(|| initial);
    use_context_provider(|| LanguageContext { language });

    rsx! {
        {children}
    }
}

/// Shared handle to a preference store, comparable by identity so it can be
/// passed as a prop.
#[derive(Clone)]
pub struct SharedPreferenceStore(Rc<dyn PreferenceStore>);

impl SharedPreferenceStore {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn load(&self) -> Option<Preferences> {
        self.0.load()
    }
}

impl PartialEq for SharedPreferenceStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn preference_store(persist: bool) -> Option<SharedPreferenceStore> {
    if !persist {
        return None;
    }
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Some(SharedPreferenceStore::new(store::LocalPreferenceStore::new()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Some(SharedPreferenceStore::new(store::MemoryPreferenceStore::new()))
    }
}

/// Saves theme and language whenever either changes.
#[component]
fn PreferenceSync(store: SharedPreferenceStore) -> Element {
    let theme = use_theme();
    let language = use_language();

    use_effect(move || {
        let preferences = Preferences::new(theme.get(), language.get());
        store.0.save(&preferences);
    });

    rsx! {}
}

/// Root provider for both contexts. Starts from the configured defaults, or
/// from the stored preferences when persistence is enabled.
#[component]
pub fn PreferencesProvider(config: PreferencesConfig, children: Element) -> Element {
    let store = use_hook(|| preference_store(config.persist));
    let initial = use_hook(|| {
        store
            .as_ref()
            .and_then(SharedPreferenceStore::load)
            .unwrap_or_else(|| config.initial())
    });

    rsx! {
        LanguageProvider {
            initial: initial.language,
            ThemeProvider {
                initial: initial.theme,
                if let Some(store) = store.clone() {
                    PreferenceSync { store }
                }
                {children}
            }
        }
    }
}
