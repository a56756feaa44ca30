use dioxus::prelude::*;
use store::{Text, Theme};

use crate::icons::{
    FaBars, FaChartPie, FaDollarSign, FaFileLines, FaGear, FaGlobe, FaMoon,
    FaRightFromBracket, FaSun, FaWallet, FaXmark,
};
use crate::{use_backend, use_language, use_navigation, use_theme, Destination, Icon};

/// Whether the sidebar is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn class(&self) -> &'static str {
        if self.open {
            "sidebar sidebar--open"
        } else {
            "sidebar sidebar--closed"
        }
    }
}

/// Sidebar state shared with everything rendered inside [`SidebarLayout`].
/// Sits beside the theme and language contexts and never writes to them.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarContext {
    state: Signal<SidebarState>,
}

impl SidebarContext {
    pub fn get(&self) -> SidebarState {
        (self.state)()
    }

    pub fn toggle(&mut self) {
        self.state.write().toggle();
        tracing::debug!("Sidebar open: {}", self.state.peek().open);
    }
}

pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
}

/// Shell for authenticated pages: collapsible sidebar, header bar with the
/// page's own `header` content plus language and theme toggles, and the page
/// body.
#[component]
pub fn SidebarLayout(header: Element, children: Element) -> Element {
    let mut theme = use_theme();
    let mut language = use_language();
    let state = use_signal(SidebarState::default);
    let mut sidebar = use_context_provider(|| SidebarContext { state });
    let navigation = use_navigation();
    let backend = use_backend();
    let mut logging_out = use_signal(|| false);

    let handle_logout = move |_: MouseEvent| {
        if logging_out() {
            return;
        }
        logging_out.set(true);
        let backend = backend.clone();
        spawn(async move {
            match backend.logout().await {
                Ok(()) => {
                    tracing::info!("Logged out");
                    navigation.go(Destination::Welcome);
                }
                Err(e) => tracing::warn!("Logout failed: {e}"),
            }
            logging_out.set(false);
        });
    };

    let state = sidebar.get();
    let t = move |key: Text| language.text(key);
    let logout_label = t(Text::Logout);

    rsx! {
        div { class: "app-shell",
            aside { class: state.class(), aria_hidden: !state.open,
                div { class: "sidebar-inner",
                    div { class: "sidebar-brand",
                        h2 { "FISCALIS" }
                        button {
                            class: "icon-btn sidebar-close",
                            aria_label: t(Text::ToggleSidebar),
                            onclick: move |_| sidebar.toggle(),
                            Icon { icon: FaXmark, width: 20, height: 20 }
                        }
                    }
                    nav { class: "sidebar-nav",
                        for destination in Destination::SIDEBAR {
                            NavItem { key: "{destination:?}", destination: destination }
                        }
                    }
                    div { class: "sidebar-footer",
                        NavItem { destination: Destination::Settings }
                        button {
                            class: "nav-item nav-item--danger",
                            disabled: logging_out(),
                            onclick: handle_logout,
                            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                            span { "{logout_label}" }
                        }
                    }
                }
            }
            div { class: "app-main",
                header { class: "topbar",
                    div { class: "topbar-start",
                        button {
                            class: "icon-btn",
                            aria_label: t(Text::ToggleSidebar),
                            onclick: move |_| sidebar.toggle(),
                            Icon { icon: FaBars, width: 20, height: 20 }
                        }
                        {header}
                    }
                    div { class: "topbar-end",
                        button {
                            class: "icon-btn icon-btn--outline",
                            aria_label: t(Text::ToggleLanguage),
                            title: language.get().code(),
                            onclick: move |_| language.toggle(),
                            Icon { icon: FaGlobe, width: 18, height: 18 }
                        }
                        button {
                            class: "icon-btn icon-btn--outline",
                            aria_label: t(Text::ToggleTheme),
                            onclick: move |_| theme.toggle(),
                            if theme.get() == Theme::Light {
                                Icon { icon: FaMoon, width: 18, height: 18 }
                            } else {
                                Icon { icon: FaSun, width: 18, height: 18 }
                            }
                        }
                    }
                }
                main { class: "app-content", {children} }
            }
        }
    }
}

fn nav_icon(destination: Destination) -> Element {
    match destination {
        Destination::Dashboard => rsx! { Icon { icon: FaChartPie, width: 16, height: 16 } },
        Destination::Expenses => rsx! { Icon { icon: FaWallet, width: 16, height: 16 } },
        Destination::Budgets => rsx! { Icon { icon: FaDollarSign, width: 16, height: 16 } },
        Destination::Reports => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        Destination::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        Destination::Welcome
        | Destination::Login
        | Destination::Register
        | Destination::ForgotPassword => rsx! {},
    }
}

/// Sidebar entry. Destinations without a page render disabled.
#[component]
fn NavItem(destination: Destination) -> Element {
    let language = use_language();
    let navigation = use_navigation();
    let available = destination.is_available();
    let label = destination.label().map(|key| language.text(key)).unwrap_or_default();
    let title = (!available).then(|| language.text(Text::ComingSoon));

    rsx! {
        button {
            class: if available { "nav-item" } else { "nav-item nav-item--inert" },
            disabled: !available,
            title: title,
            onclick: move |_| navigation.go(destination),
            {nav_icon(destination)}
            span { "{label}" }
        }
    }
}
