//! # User model
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`].
//! `role` is kept as the raw column text; [`User::role`] parses it and treats
//! anything unrecognised as a plain user.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection returned by `/auth/me`, the auth endpoints and
//! the admin user list. It omits the password hash and turns the `Uuid` into a
//! `String` so it works in WASM.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::{Role, SessionUser};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role).unwrap_or_default()
    }

    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role(),
            is_active: self.is_active,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Case-insensitive match on name, email or role. An empty term matches.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.display_name().to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.role.as_str().contains(&needle)
    }

    /// What the browser remembers about a signed-in user.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: Option<&str>, email: &str, role: Role) -> UserInfo {
        UserInfo {
            id: "7".to_string(),
            email: email.to_string(),
            full_name: name.map(str::to_string),
            role,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(info(Some("Admin User"), "a@x.io", Role::Admin).display_name(), "Admin User");
        assert_eq!(info(None, "a@x.io", Role::User).display_name(), "a@x.io");
        assert_eq!(info(Some("  "), "a@x.io", Role::User).display_name(), "a@x.io");
    }

    #[test]
    fn test_matches_name_email_or_role() {
        let admin = info(Some("Admin User"), "admin@example.com", Role::Admin);
        let user = info(Some("Regular User"), "user@example.com", Role::User);

        assert!(admin.matches("ADMIN"));
        assert!(!user.matches("admin"));
        assert!(user.matches("regular"));
        assert!(user.matches("user@EXAMPLE"));
        assert!(admin.matches(""));
        assert!(!admin.matches("pilot"));
    }

    #[test]
    fn test_session_user_projection() {
        let admin = info(Some("Admin User"), "admin@example.com", Role::Admin);
        let session = admin.to_session_user();
        assert_eq!(session.id, "7");
        assert!(session.is_admin());
    }
}
