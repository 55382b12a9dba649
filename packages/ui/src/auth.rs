//! Authentication context and hooks for the UI.
//!
//! The signed-in user and bearer token live in [`store::SessionStore`]; this
//! module mirrors them into a `Signal<AuthState>` provided by
//! [`AuthProvider`]. Storage is read in an effect, so server-side rendering
//! and the first client frame both see `loading: true`.

use api::models::{AuthResponse, RegisterRequest};
use api::{ApiClient, ClientError};
use dioxus::prelude::*;
use store::{SessionStore, SessionUser};

use crate::icons::FaRightFromBracket;
use crate::platform::{make_client, make_store};
use crate::Icon;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Client carrying this session's bearer token.
    pub fn client(&self) -> ApiClient {
        make_client(self.token.clone())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    use_effect(move || {
        let session = SessionStore::new(make_store());
        // A user blob without a token cannot make requests
        let (user, token) = match (session.load(), session.token()) {
            (Some(user), Some(token)) => (Some(user), Some(token)),
            _ => (None, None),
        };
        auth_state.set(AuthState {
            user,
            token: token.clone(),
            loading: false,
        });

        if let Some(token) = token {
            spawn(refresh_session(auth_state, token));
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Re-read the stored user from `/auth/me` so a role or account change
/// made on the server shows up without signing in again.
async fn refresh_session(mut auth: Signal<AuthState>, token: String) {
    let result = make_client(Some(token.clone())).me().await;
    // Signed out or switched accounts while the request was in flight
    if auth.peek().token.as_deref() != Some(token.as_str()) {
        return;
    }
    match result {
        Ok(info) => {
            let user = info.to_session_user();
            SessionStore::new(make_store()).save(&user, &token);
            auth.set(AuthState {
                user: Some(user),
                token: Some(token),
                loading: false,
            });
        }
        Err(e) => {
            if !expire_session(auth, &e) {
                tracing::warn!("Could not refresh session: {}", e);
            }
        }
    }
}

fn sign_in(mut auth: Signal<AuthState>, response: &AuthResponse) -> SessionUser {
    let user = response.user.to_session_user();
    SessionStore::new(make_store()).save(&user, &response.access_token);
    auth.set(AuthState {
        user: Some(user.clone()),
        token: Some(response.access_token.clone()),
        loading: false,
    });
    tracing::info!("Signed in as {}", user.email);
    user
}

/// Exchange credentials for a session and remember it.
pub async fn login(
    auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<SessionUser, ClientError> {
    let response = make_client(None).login(email.trim(), password).await?;
    Ok(sign_in(auth, &response))
}

/// Create an account and sign straight into it.
pub async fn register(
    auth: Signal<AuthState>,
    request: &RegisterRequest,
) -> Result<SessionUser, ClientError> {
    let response = make_client(None).register(request).await?;
    Ok(sign_in(auth, &response))
}

/// Forget the stored session.
pub fn logout(mut auth: Signal<AuthState>) {
    SessionStore::new(make_store()).clear();
    auth.set(AuthState::signed_out());
}

/// Drop the session when the server rejected its token. Returns whether it
/// did, so callers can skip their own error toast.
pub fn expire_session(auth: Signal<AuthState>, error: &ClientError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    tracing::warn!("Session rejected by the server, signing out");
    logout(auth);
    true
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] compact: bool,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "button logout-button",
            "data-style": "outline",
            title: "{label}",
            onclick: move |_| {
                logout(auth);
                on_logout.call(());
            },
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            if !compact {
                span { "{label}" }
            }
        }
    }
}
