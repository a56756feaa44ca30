//! Shared UI for Fiscalis: preference contexts, navigation, the sidebar shell
//! and every page.
//!
//! Pages never talk to a router directly. They ask for a [`Destination`] and
//! the host app decides how to get there.

use dioxus::prelude::*;

pub mod chart;
pub mod components;
pub mod views;

mod backend;
pub use backend::{use_backend, BackendHandle, BackendProvider};

mod navigation;
pub use navigation::{use_navigation, Destination, Navigation, NavigationProvider};

mod preferences;
pub use preferences::{
    apply_theme, use_language, use_theme, LanguageContext, LanguageProvider, PreferencesProvider,
    SharedPreferenceStore, ThemeContext, ThemeProvider,
};

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaInstagram, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const FISCALIS_CSS: Asset = asset!("/assets/fiscalis.css");
