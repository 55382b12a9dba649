//! Data models for the application.
//!
//! Everything here except [`User`] is a wire type shared by the browser and
//! the server, so it must stay free of server-only crates.

mod admin;
mod auth;
mod search;
mod user;

pub use admin::{
    AdminCommandRequest, AdminCommandResponse, AppInfo, ErrorBody, ExecuteRequest,
    ExecuteResponse, HealthResponse, TableInfo, UploadKind, UploadResponse,
};
pub use auth::{
    validate_credentials, AuthResponse, CreateUserRequest, LoginRequest, RegisterRequest,
    MIN_PASSWORD_LEN,
};
pub use search::{SearchHistoryItem, SearchRequest, SearchResponse};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
