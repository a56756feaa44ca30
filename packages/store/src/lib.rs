//! Client-side state for Fiscalis, independent of any UI framework.
//!
//! | Module | Holds |
//! |--------|-------|
//! | [`preferences`] | Theme, language, and the [`PreferenceStore`] seam |
//! | [`i18n`] | Translation keys and dictionaries |
//! | [`expense`] | Expense draft, repeat policy, create request |
//! | [`forms`] | Login, register and expense form lifecycles |
//! | [`validation`] | Field errors reported by the backend |
//! | [`dashboard`] | Dashboard summary data and money formatting |
//! | [`config`] | `Fiscalis.toml` |

pub mod config;
pub mod dashboard;
pub mod expense;
pub mod forms;
pub mod i18n;
pub mod preferences;
pub mod validation;

mod memory;
pub use memory::MemoryPreferenceStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalPreferenceStore;

pub use config::{ConfigError, FiscalisConfig};
pub use expense::{ExpenseDraft, Frequency, NewExpense, RepeatOption, RepeatPolicy};
pub use forms::{ExpenseForm, FormStatus, LoginCredentials, LoginForm, RegisterForm, Registration};
pub use i18n::Text;
pub use preferences::{Language, PreferenceError, PreferenceStore, Preferences, Theme};
pub use validation::FieldErrors;
