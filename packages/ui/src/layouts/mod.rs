//! Page shells: [`AuthLayout`] for the sign-in screens and
//! [`DashboardLayout`] for everything behind the login.

mod auth_layout;
pub use auth_layout::AuthLayout;

mod dashboard_layout;
pub use dashboard_layout::{DashboardLayout, NavItem};
