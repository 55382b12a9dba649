//! # API crate: wire types, HTTP client and REST backend for Sky Scribe
//!
//! The browser build uses the shared [`models`] and the [`ApiClient`]. With the
//! `server` feature the same crate also provides the backend that answers
//! those requests, mounted by the `web` binary next to the Dioxus app.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | none | Request/response bodies, [`UserInfo`], `User` row (server) |
//! | [`client`] | none | [`ApiClient`] and [`ClientError`] |
//! | [`auth`] | `server` | Argon2 password hashing, JWT bearer tokens, axum extractors |
//! | [`config`] | `server` | Layered [`config::Settings`] |
//! | [`db`] | `server` | PostgreSQL pool, migrations, user and history queries |
//! | [`translator`] | `server` | Natural language to SQL (keyword rules or OpenAI) |
//! | [`query`] | `server` | Read-only checks and execution of generated SQL |
//! | [`import`] | `server` | CSV import of airports and flights |
//! | [`routes`] | `server` | axum router under `/api/v1` |
//!
//! ## Server functions exposed here
//!
//! [`get_app_info`] is a Dioxus server function. It is compiled twice: with
//! the real body behind `#[cfg(feature = "server")]` and as a client stub
//! that forwards the call over HTTP.

use dioxus::prelude::*;

pub mod auth;
pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod import;
pub mod models;
#[cfg(feature = "server")]
pub mod query;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod translator;

pub use client::{ApiClient, ClientError};
pub use models::{AppInfo, UserInfo};

/// Public settings the login and registration screens adapt to.
#[cfg(feature = "server")]
#[get("/api/info")]
pub async fn get_app_info() -> Result<AppInfo, ServerFnError> {
    let settings = config::settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(AppInfo {
        translator: settings.translator.backend.as_str().to_string(),
        allow_admin_registration: settings.auth.allow_admin_registration,
        demo_users: settings.auth.seed_demo_users,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/info")]
pub async fn get_app_info() -> Result<AppInfo, ServerFnError> {
    Ok(AppInfo::default())
}
