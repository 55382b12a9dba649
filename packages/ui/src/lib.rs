//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod platform;
pub use platform::{api_base_url, make_client, make_store, PlatformStore};

pub mod browser;

mod auth;
pub use auth::{
    expire_session, login, logout, register, use_auth, AuthProvider, AuthState, LogoutButton,
};

pub mod guard;
pub use guard::{redirect_for, Access, Guard, GuardRedirect};

mod theme;
pub use theme::{use_theme, ThemeProvider, ThemeToggle};

pub mod layouts;
pub use layouts::{AuthLayout, DashboardLayout, NavItem};

mod query_input;
pub use query_input::{can_submit, QueryInput};

mod sql_display;
pub use sql_display::{highlight_sql, SqlDisplay, SqlSegment, SQL_KEYWORDS};

mod results_display;
pub use results_display::ResultsDisplay;
