use api::HttpBackend;
use dioxus::prelude::*;
use store::config::LoggingConfig;
use store::FiscalisConfig;
use ui::views::{Dashboard, ExpenseCreate, Login, Register, Welcome};
use ui::{BackendHandle, BackendProvider, Destination, NavigationProvider, PreferencesProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Welcome {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/expenses")]
        ExpenseCreate {},
}

const CONFIG_TOML: &str = include_str!("../Fiscalis.toml");

fn main() {
    let (config, problem) = match FiscalisConfig::from_toml(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (FiscalisConfig::default(), Some(e)),
    };

    init_logging(&config.logging);
    if let Some(e) = problem {
        tracing::warn!("Ignoring invalid {}: {e}", FiscalisConfig::filename());
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn init_logging(config: &LoggingConfig) {
    let level = config.level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Logger already initialized: {e}");
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<FiscalisConfig>();
    let backend = use_hook(|| BackendHandle::new(HttpBackend::new(config.api.clone())));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::FISCALIS_CSS }

        PreferencesProvider { config: config.preferences.clone(),
            BackendProvider { backend: backend,
                Router::<Route> {}
            }
        }
    }
}

/// Lets shared pages navigate without knowing about [`Route`].
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        NavigationProvider {
            on_navigate: move |destination: Destination| {
                if let Some(route) = route_for(destination) {
                    nav.push(route);
                }
            },
            Outlet::<Route> {}
        }
    }
}

fn route_for(destination: Destination) -> Option<Route> {
    match destination {
        Destination::Welcome => Some(Route::Welcome {}),
        Destination::Login => Some(Route::Login {}),
        Destination::Register => Some(Route::Register {}),
        Destination::Dashboard => Some(Route::Dashboard {}),
        Destination::Expenses => Some(Route::ExpenseCreate {}),
        Destination::ForgotPassword
        | Destination::Budgets
        | Destination::Reports
        | Destination::Settings => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Destination; 9] = [
        Destination::Welcome,
        Destination::Login,
        Destination::Register,
        Destination::ForgotPassword,
        Destination::Dashboard,
        Destination::Expenses,
        Destination::Budgets,
        Destination::Reports,
        Destination::Settings,
    ];

    #[test]
    fn test_routes_match_destination_paths() {
        for destination in ALL {
            let route_path = route_for(destination).map(|route| route.to_string());
            assert_eq!(route_path.as_deref(), destination.path(), "{destination:?}");
        }
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = FiscalisConfig::from_toml(CONFIG_TOML).unwrap();
        assert!(!config.preferences.persist);
        assert_eq!(config.logging.level, "info");
    }
}
