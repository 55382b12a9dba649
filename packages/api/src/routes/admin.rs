use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::auth::create_account;
use super::AppState;
use crate::auth::AdminUser;
use crate::db::{searches, users};
use crate::error::ApiError;
use crate::import;
use crate::models::{
    AdminCommandRequest, AdminCommandResponse, CreateUserRequest, ExecuteRequest,
    ExecuteResponse, TableInfo, UploadKind, UploadResponse, UserInfo,
};
use crate::query::{execute_statement, normalize_statement};

/// Generate SQL for a command. Nothing runs until `/admin/execute`.
pub async fn command(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(req): Json<AdminCommandRequest>,
) -> Result<Json<AdminCommandResponse>, ApiError> {
    let command = req.command.trim();
    if command.is_empty() {
        return Err(ApiError::BadRequest("Command must not be empty".to_string()));
    }
    let sql_query = state.translator.admin_sql(command).await?;
    tracing::info!("{} asked for: {}", admin.email, command);

    Ok(Json(AdminCommandResponse {
        command: command.to_string(),
        sql_query,
        message: "SQL generated. Review it before executing.".to_string(),
    }))
}

pub async fn execute(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(req): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let statement = normalize_statement(&req.sql_query);
    if statement.is_empty() {
        return Err(ApiError::BadRequest("SQL query must not be empty".to_string()));
    }

    let rows_affected = execute_statement(&state.pool, &statement)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Error executing command: {e}")))?;
    tracing::info!("{} executed sql, {} rows affected", admin.email, rows_affected);

    Ok(Json(ExecuteResponse {
        message: "Command executed successfully".to_string(),
        rows_affected,
    }))
}

pub async fn tables(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<TableInfo>>, ApiError> {
    Ok(Json(searches::table_counts(&state.pool).await?))
}

pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let users = users::list(&state.pool).await?;
    Ok(Json(users.iter().map(|u| u.to_info()).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let user = create_account(&state, &req).await?;
    tracing::info!("{} created user {}", admin.email, user.email);
    Ok((StatusCode::CREATED, Json(user.to_info())))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("User not found".to_string()))?;
    if admin.sub == id.to_string() {
        return Err(ApiError::BadRequest("You cannot delete your own account".to_string()));
    }
    if users::delete(&state.pool, id).await? == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    tracing::info!("{} deleted user {}", admin.email, id);
    Ok(StatusCode::NO_CONTENT)
}

/// Import a CSV body into `airports` or `flights`.
pub async fn upload(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(kind): Path<String>,
    body: String,
) -> Result<Json<UploadResponse>, ApiError> {
    let kind = UploadKind::parse(&kind)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown upload target '{kind}'")))?;

    let inserted = match kind {
        UploadKind::Airports => {
            let records = import::parse_airports(&body)?;
            import::insert_airports(&state.pool, &records).await?
        }
        UploadKind::Flights => {
            let records = import::parse_flights(&body)?;
            import::insert_flights(&state.pool, &records).await?
        }
    };
    tracing::info!("{} imported {} {}", admin.email, inserted, kind.as_str());

    Ok(Json(UploadResponse {
        message: format!("Imported {inserted} {}", kind.as_str()),
        inserted,
    }))
}
