//! Error type returned by every REST handler.
//!
//! Each variant maps to one HTTP status and renders as `{"detail": "..."}`.
//! Server faults are logged and their detail is replaced with a generic
//! message so database internals never reach the browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::auth::{PasswordError, TokenError};
use crate::import::ImportError;
use crate::models::ErrorBody;
use crate::translator::TranslatorError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Not enough permissions")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Translator(#[from] TranslatorError),
    #[error(transparent)]
    Import(ImportError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password error: {0}")]
    Password(#[from] PasswordError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Import(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Translator(_)
            | ApiError::Database(_)
            | ApiError::Password(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::Password(_) | ApiError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized("Could not validate credentials".to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => ApiError::Unauthorized("Token has expired".to_string()),
            TokenError::Invalid(_) => ApiError::invalid_credentials(),
            TokenError::Encode(msg) => ApiError::Internal(msg),
        }
    }
}

/// Bad input is the uploader's fault. Constraint violations are reported
/// back to them; any other database failure is a server fault.
impl From<ImportError> for ApiError {
    fn from(e: ImportError) -> Self {
        match e {
            ImportError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                ApiError::Conflict(format!("error importing rows: {}", db.message()))
            }
            ImportError::Database(sqlx::Error::Database(db))
                if db.is_foreign_key_violation() || db.is_check_violation() =>
            {
                ApiError::BadRequest(format!("error importing rows: {}", db.message()))
            }
            ImportError::Database(db) => ApiError::Database(db),
            other => ApiError::Import(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = ErrorBody {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::invalid_credentials().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::Conflict("dup".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(TokenError::Expired).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_import_errors() {
        let err = ApiError::from(ImportError::Empty);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "the file has no data rows");

        let err = ApiError::from(ImportError::UnknownAirport("ZZZ".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        // Lost connections and timeouts are not the uploader's fault
        let err = ApiError::from(ImportError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
    }

    #[test]
    fn test_server_faults_hide_details() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");

        let err = ApiError::Conflict("Email already registered".into());
        assert_eq!(err.detail(), "Email already registered");
    }
}
