//! Application shell for signed-in users.
//!
//! On wide screens the sidebar sits beside the content and can be collapsed
//! to an icon rail. On narrow screens it slides in over the content from a
//! floating menu button, with a backdrop that closes it.

use dioxus::prelude::*;
use store::Role;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{
    FaBars, FaChevronLeft, FaChevronRight, FaClockRotateLeft, FaDatabase, FaMagnifyingGlass,
    FaUser, FaUsers, FaXmark,
};
use crate::theme::ThemeToggle;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Search,
    History,
    Users,
    Database,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Search,
        NavItem::History,
        NavItem::Users,
        NavItem::Database,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Search => "Search",
            NavItem::History => "History",
            NavItem::Users => "Users",
            NavItem::Database => "Database",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, NavItem::Users | NavItem::Database)
    }

    /// Entries shown to a user with `role`.
    pub fn visible_for(role: Role) -> Vec<NavItem> {
        Self::ALL
            .into_iter()
            .filter(|item| !item.admin_only() || role.is_admin())
            .collect()
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Search => rsx! { Icon { icon: FaMagnifyingGlass, width: 16, height: 16 } },
        NavItem::History => rsx! { Icon { icon: FaClockRotateLeft, width: 16, height: 16 } },
        NavItem::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavItem::Database => rsx! { Icon { icon: FaDatabase, width: 16, height: 16 } },
    }
}

#[component]
pub fn DashboardLayout(
    active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let mut collapsed = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    let user = auth().user;
    let items = NavItem::visible_for(user.as_ref().map(|u| u.role).unwrap_or_default());

    rsx! {
        div { class: "dashboard-layout",
            button {
                class: "mobile-menu-button",
                aria_label: "Toggle navigation",
                onclick: move |_| mobile_open.toggle(),
                if mobile_open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }

            aside {
                class: "sidebar",
                "data-collapsed": "{collapsed()}",
                "data-mobile-open": "{mobile_open()}",

                div { class: "sidebar-brand",
                    div { class: "sidebar-mark",
                        Icon { icon: FaDatabase, width: 20, height: 20 }
                    }
                    if !collapsed() {
                        h1 { "Sky Scribe" }
                    }
                    button {
                        class: "sidebar-collapse",
                        aria_label: if collapsed() { "Expand sidebar" } else { "Collapse sidebar" },
                        onclick: move |_| collapsed.toggle(),
                        if collapsed() {
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        } else {
                            Icon { icon: FaChevronLeft, width: 12, height: 12 }
                        }
                    }
                }

                if let Some(user) = user {
                    div { class: "sidebar-user", title: "{user.email}",
                        div { class: "sidebar-avatar",
                            Icon { icon: FaUser, width: 14, height: 14 }
                        }
                        if !collapsed() {
                            div { class: "sidebar-user-text",
                                p { class: "sidebar-email", "{user.email}" }
                                p { class: "sidebar-role", "{user.role}" }
                            }
                        }
                    }
                }

                nav { class: "sidebar-nav",
                    for item in items {
                        button {
                            key: "{item.label()}",
                            class: "sidebar-link",
                            "data-active": active == Some(item),
                            title: item.label(),
                            onclick: move |_| {
                                mobile_open.set(false);
                                on_navigate.call(item);
                            },
                            NavIcon { item }
                            if !collapsed() {
                                span { "{item.label()}" }
                            }
                        }
                    }
                }

                div { class: "sidebar-footer",
                    ThemeToggle {}
                    LogoutButton { on_logout, compact: collapsed() }
                }
            }

            main { class: "dashboard-content", {children} }

            if mobile_open() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| mobile_open.set(false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_users_see_search_and_history() {
        assert_eq!(
            NavItem::visible_for(Role::User),
            vec![NavItem::Search, NavItem::History]
        );
    }

    #[test]
    fn test_admins_see_everything() {
        assert_eq!(NavItem::visible_for(Role::Admin), NavItem::ALL.to_vec());
    }
}
