//! # REST routes
//!
//! Everything is mounted under [`API_PREFIX`] and shares one [`AppState`].
//!
//! | Method | Path | Guard |
//! |--------|------|-------|
//! | POST | `/auth/register`, `/auth/token` | none |
//! | GET | `/auth/me` | bearer |
//! | POST | `/search` | bearer |
//! | GET | `/search/history` | bearer |
//! | POST | `/admin/command`, `/admin/execute` | admin |
//! | GET | `/admin/tables` | admin |
//! | GET, POST | `/admin/users` | admin |
//! | DELETE | `/admin/users/{id}` | admin |
//! | POST | `/admin/upload/{kind}` | admin |
//! | GET | `/health` | none |

mod admin;
mod auth;
mod search;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use sqlx::PgPool;

use crate::auth::TokenIssuer;
use crate::config::Settings;
use crate::models::HealthResponse;
use crate::translator::Translator;

pub const API_PREFIX: &str = "/api/v1";

/// Shared handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: Arc<TokenIssuer>,
    pub translator: Arc<Translator>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: PgPool, settings: Settings, translator: Translator) -> Self {
        let tokens = TokenIssuer::new(
            &settings.auth.secret_key,
            settings.auth.access_token_expire_minutes,
        );
        Self {
            pool,
            tokens: Arc::new(tokens),
            translator: Arc::new(translator),
            settings: Arc::new(settings),
        }
    }
}

/// The API router, state applied, ready to merge into the app router.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/token", post(auth::login))
        .route("/me", get(auth::me));

    let admin_routes = Router::new()
        .route("/command", post(admin::command))
        .route("/execute", post(admin::execute))
        .route("/tables", get(admin::tables))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/upload/{kind}", post(admin::upload));

    let api = Router::new()
        .nest("/auth", auth_routes)
        .route("/search", post(search::search))
        .route("/search/history", get(search::history))
        .nest("/admin", admin_routes)
        .route("/health", get(health));

    Router::new().nest(API_PREFIX, api).with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
