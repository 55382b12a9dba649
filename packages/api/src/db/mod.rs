//! # Database module
//!
//! PostgreSQL access for the server, gated behind the `server` feature so the
//! WASM build never pulls in SQLx.
//!
//! - [`get_pool`]: lazy process-wide pool (a [`tokio::sync::OnceCell`]).
//! - [`migrate`]: embedded migrations from `packages/api/migrations`, which
//!   create the schema and seed the demonstration airports and flights.
//! - [`seed_demo_users`]: the two demo accounts shown on the login screen.
//! - [`users`] and [`searches`]: the queries the REST handlers run.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
pub mod searches;
#[cfg(feature = "server")]
pub mod users;

#[cfg(feature = "server")]
pub use pool::{get_pool, migrate, seed_demo_users, DEMO_USERS};
