//! Request and response bodies for sign-in, registration and user creation.

use serde::{Deserialize, Serialize};
use store::Role;

use super::UserInfo;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Admin-created account. Same shape as a registration.
pub type CreateUserRequest = RegisterRequest;

/// Issued on successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: UserInfo) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Shared sign-up validation, run in the browser before sending and again on
/// the server.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Invalid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("user@example.com", "user123").is_ok());
        assert!(validate_credentials("  ", "user123").is_err());
        assert!(validate_credentials("user.example.com", "user123").is_err());
        assert_eq!(
            validate_credentials("user@example.com", "12345").unwrap_err(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_register_request_defaults_to_user_role() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"secret1"}"#).unwrap();
        assert_eq!(req.role, Role::User);
        assert!(req.full_name.is_none());
    }
}
