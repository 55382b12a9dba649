//! Route layouts: each applies an access rule, then renders the page shell.

use dioxus::prelude::*;
use ui::{Access, DashboardLayout, Guard, GuardRedirect, NavItem};

use crate::Route;

fn redirect_route(target: GuardRedirect) -> Route {
    match target {
        GuardRedirect::Login => Route::Login {},
        GuardRedirect::Dashboard => Route::Dashboard {},
    }
}

fn nav_route(item: NavItem) -> Route {
    match item {
        NavItem::Search => Route::Dashboard {},
        NavItem::History => Route::History {},
        NavItem::Users => Route::Users {},
        NavItem::Database => Route::Database {},
    }
}

fn active_item(route: &Route) -> Option<NavItem> {
    match route {
        Route::Dashboard {} => Some(NavItem::Search),
        Route::History {} => Some(NavItem::History),
        Route::Users {} => Some(NavItem::Users),
        Route::Database {} => Some(NavItem::Database),
        _ => None,
    }
}

/// Login and register: signed-in users are sent to the dashboard.
#[component]
pub fn GuestShell() -> Element {
    let nav = use_navigator();
    rsx! {
        Guard {
            access: Access::Guest,
            on_redirect: move |target| {
                nav.replace(redirect_route(target));
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn AppShell(access: Access) -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        Guard {
            access,
            on_redirect: move |target| {
                nav.replace(redirect_route(target));
            },
            DashboardLayout {
                active: active_item(&route),
                on_navigate: move |item| {
                    nav.push(nav_route(item));
                },
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn MemberShell() -> Element {
    rsx! {
        AppShell { access: Access::Member }
    }
}

#[component]
pub fn AdminShell() -> Element {
    rsx! {
        AppShell { access: Access::Admin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_item_has_a_route() {
        for item in NavItem::ALL {
            assert_eq!(active_item(&nav_route(item)), Some(item));
        }
        assert_eq!(active_item(&Route::Login {}), None);
    }
}
