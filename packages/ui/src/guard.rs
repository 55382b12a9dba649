//! Route access rules.
//!
//! Pages declare an [`Access`] level; [`redirect_for`] decides where a visitor
//! who does not meet it goes. The [`Guard`] component applies the decision
//! once the session has been read from storage, and again whenever it changes,
//! so logging out anywhere sends the visitor back to the login page.

use dioxus::prelude::*;
use store::{Role, SessionUser};

use crate::auth::use_auth;
use crate::components::Spinner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Only visitors who are not signed in (login, register).
    Guest,
    /// Any signed-in user.
    Member,
    /// Signed-in admins.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRedirect {
    Login,
    Dashboard,
}

pub fn redirect_for(access: Access, user: Option<&SessionUser>) -> Option<GuardRedirect> {
    match (access, user) {
        (Access::Public, _) => None,
        (Access::Guest, Some(_)) => Some(GuardRedirect::Dashboard),
        (Access::Guest, None) => None,
        (Access::Member | Access::Admin, None) => Some(GuardRedirect::Login),
        (Access::Member, Some(_)) => None,
        (Access::Admin, Some(user)) if user.role == Role::Admin => None,
        (Access::Admin, Some(_)) => Some(GuardRedirect::Dashboard),
    }
}

/// Render `children` only for visitors allowed by `access`; otherwise ask the
/// caller to navigate away.
#[component]
pub fn Guard(access: Access, on_redirect: EventHandler<GuardRedirect>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if let Some(target) = redirect_for(access, state.user.as_ref()) {
            on_redirect.call(target);
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", Spinner { size: 24 } }
        };
    }
    if redirect_for(access, state.user.as_ref()).is_some() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: "7".to_string(),
            email: "pilot@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_public_never_redirects() {
        assert_eq!(redirect_for(Access::Public, None), None);
        assert_eq!(redirect_for(Access::Public, Some(&user(Role::User))), None);
    }

    #[test]
    fn test_guest_pages_send_signed_in_users_to_dashboard() {
        assert_eq!(redirect_for(Access::Guest, None), None);
        assert_eq!(
            redirect_for(Access::Guest, Some(&user(Role::Admin))),
            Some(GuardRedirect::Dashboard)
        );
    }

    #[test]
    fn test_anonymous_visitors_go_to_login() {
        assert_eq!(redirect_for(Access::Member, None), Some(GuardRedirect::Login));
        assert_eq!(redirect_for(Access::Admin, None), Some(GuardRedirect::Login));
    }

    #[test]
    fn test_admin_pages_reject_regular_users() {
        let regular = user(Role::User);
        assert_eq!(redirect_for(Access::Member, Some(&regular)), None);
        assert_eq!(
            redirect_for(Access::Admin, Some(&regular)),
            Some(GuardRedirect::Dashboard)
        );
        assert_eq!(redirect_for(Access::Admin, Some(&user(Role::Admin))), None);
    }
}
