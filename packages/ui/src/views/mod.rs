mod backdrop;

mod dashboard;
pub use dashboard::Dashboard;

mod expense_create;
pub use expense_create::ExpenseCreate;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod sidebar_layout;
pub use sidebar_layout::{use_sidebar, SidebarContext, SidebarLayout, SidebarState};

mod welcome;
pub use welcome::Welcome;

pub const APP_NAME: &str = "Fiscalis";

/// Browser tab title for a page.
pub fn page_title(title: &str) -> String {
    format!("{APP_NAME} • {title}")
}
