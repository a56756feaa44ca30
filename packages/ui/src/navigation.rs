//! Where the user can go, independent of how the router spells it.
//!
//! Pages ask for a [`Destination`] through [`Navigation::go`]; the host app
//! maps it onto its own route type. Budgets, Reports, Settings and password
//! recovery have no page yet, so requests for them are logged and dropped.

use dioxus::prelude::*;
use store::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Expenses,
    Budgets,
    Reports,
    Settings,
}

impl Destination {
    /// Sidebar entries, top to bottom.
    pub const SIDEBAR: [Destination; 4] = [
        Destination::Dashboard,
        Destination::Expenses,
        Destination::Budgets,
        Destination::Reports,
    ];

    pub fn path(self) -> Option<&'static str> {
        match self {
            Destination::Welcome => Some("/"),
            Destination::Login => Some("/login"),
            Destination::Register => Some("/register"),
            Destination::Dashboard => Some("/dashboard"),
            Destination::Expenses => Some("/expenses"),
            Destination::ForgotPassword
            | Destination::Budgets
            | Destination::Reports
            | Destination::Settings => None,
        }
    }

    pub fn is_available(self) -> bool {
        self.path().is_some()
    }

    /// Translation key for entries shown in the sidebar.
    pub fn label(self) -> Option<Text> {
        match self {
            Destination::Dashboard => Some(Text::Dashboard),
            Destination::Expenses => Some(Text::Expenses),
            Destination::Budgets => Some(Text::Budgets),
            Destination::Reports => Some(Text::Reports),
            Destination::Settings => Some(Text::Settings),
            Destination::Welcome
            | Destination::Login
            | Destination::Register
            | Destination::ForgotPassword => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Navigation {
    on_navigate: EventHandler<Destination>,
}

impl Navigation {
    pub fn go(&self, destination: Destination) {
        if destination.is_available() {
            self.on_navigate.call(destination);
        } else {
            tracing::warn!("No page for {destination:?} yet");
        }
    }
}

#[component]
pub fn NavigationProvider(on_navigate: EventHandler<Destination>, children: Element) -> Element {
    use_context_provider(|| Navigation { on_navigate });
    rsx! {
        {children}
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbuilt_pages_have_no_path() {
        for destination in [
            Destination::ForgotPassword,
            Destination::Budgets,
            Destination::Reports,
            Destination::Settings,
        ] {
            assert!(!destination.is_available());
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: Vec<_> = [
            Destination::Welcome,
            Destination::Login,
            Destination::Register,
            Destination::Dashboard,
            Destination::Expenses,
        ]
        .iter()
        .filter_map(|d| d.path())
        .collect();
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(paths.len(), 5);
        assert_eq!(deduped.len(), 5);
    }

    #[test]
    fn test_sidebar_starts_with_dashboard() {
        assert_eq!(Destination::SIDEBAR[0], Destination::Dashboard);
        assert_eq!(Destination::SIDEBAR[0].path(), Some("/dashboard"));
    }

    #[test]
    fn test_sidebar_entries_are_labelled() {
        for destination in Destination::SIDEBAR {
            assert!(destination.label().is_some(), "{destination:?} has no label");
        }
        assert!(Destination::ForgotPassword.label().is_none());
    }
}
