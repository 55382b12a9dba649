//! # Store crate: client-side persistence for Sky Scribe
//!
//! Session, query history and theme preference all live in the browser's
//! key-value storage. Instead of reaching for `localStorage` from every
//! component, each concern is a small typed wrapper over the
//! [`KeyValueStore`] trait, so the same code runs against [`LocalStore`] in
//! the browser and [`MemoryStore`] in tests and server-side rendering.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`SessionUser`], [`Role`], [`HistoryEntry`], [`ResultRow`] |
//! | [`session`] | [`SessionStore`]: user blob + bearer token |
//! | [`history`] | [`QueryHistory`]: newest-first list capped at 50 |
//! | [`theme`] | [`ThemeStore`]: light/dark choice |
//! | [`export`] | RFC 4180 CSV for result tables and history |

pub mod export;
pub mod history;
mod kv;
pub mod models;
pub mod session;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use history::{QueryHistory, HISTORY_LIMIT};
pub use kv::KeyValueStore;
pub use models::{HistoryEntry, ResultRow, Role, SessionUser};
pub use session::SessionStore;
pub use theme::{Theme, ThemeStore};
