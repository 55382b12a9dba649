use axum::extract::State;
use axum::Json;
use store::Role;

use super::AppState;
use crate::auth::{hash_password, verify_password, CurrentUser};
use crate::db::users;
use crate::error::ApiError;
use crate::models::{
    validate_credentials, AuthResponse, LoginRequest, RegisterRequest, User, UserInfo,
};

/// Validate and insert a new account. Shared by sign-up and the admin panel.
pub(super) async fn create_account(state: &AppState, req: &RegisterRequest) -> Result<User, ApiError> {
    let email = req.email.trim().to_lowercase();
    validate_credentials(&email, &req.password).map_err(ApiError::BadRequest)?;

    if users::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let full_name = req
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let hash = hash_password(&req.password)?;

    users::insert(&state.pool, &email, &hash, full_name, req.role)
        .await
        .map_err(|e| {
            if users::is_unique_violation(&e) {
                ApiError::Conflict("Email already registered".to_string())
            } else {
                ApiError::Database(e)
            }
        })
}

fn signed_in(state: &AppState, user: &User) -> Result<Json<AuthResponse>, ApiError> {
    let token = state.tokens.issue(user)?;
    Ok(Json(AuthResponse::bearer(token, user.to_info())))
}

/// Self-service sign-up may only pick the admin role when the server allows it.
fn check_self_registration(role: Role, allow_admin: bool) -> Result<(), ApiError> {
    if role == Role::Admin && !allow_admin {
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    check_self_registration(req.role, state.settings.auth.allow_admin_registration)?;

    let user = create_account(&state, &req).await?;
    let user = users::touch_last_login(&state.pool, user.id).await?;
    tracing::info!("registered {} as {}", user.email, user.role());
    signed_in(&state, &user)
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let rejected = || ApiError::Unauthorized("Incorrect email or password".to_string());

    let user = users::find_by_email(&state.pool, req.email.trim())
        .await?
        .ok_or_else(rejected)?;
    if !verify_password(&req.password, &user.password_hash)? {
        tracing::warn!("failed login for {}", user.email);
        return Err(rejected());
    }
    if !user.is_active {
        return Err(ApiError::BadRequest("Inactive user".to_string()));
    }

    let user = users::touch_last_login(&state.pool, user.id).await?;
    tracing::info!("{} signed in", user.email);
    signed_in(&state, &user)
}

pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<UserInfo>, ApiError> {
    let user = users::find_by_id(&state.pool, current.id()?)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;
    Ok(Json(user.to_info()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_admin_self_registration() {
        assert!(check_self_registration(Role::User, false).is_ok());
        assert!(check_self_registration(Role::Admin, true).is_ok());

        let err = check_self_registration(Role::Admin, false).unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }
}
