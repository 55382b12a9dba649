use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::auth::CurrentUser;
use crate::db::searches;
use crate::error::ApiError;
use crate::models::{SearchHistoryItem, SearchRequest, SearchResponse};
use crate::query::{fetch_json_rows, read_only_statement};

pub async fn search(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query must not be empty".to_string()));
    }
    tracing::info!("search from {}: {}", current.0.email, query);

    let sql = state.translator.search_sql(query).await?;
    tracing::info!("generated sql: {}", sql);

    let statement = read_only_statement(&sql).ok_or_else(|| {
        tracing::warn!("refused non read-only sql: {}", sql);
        ApiError::BadRequest("Only read-only SELECT queries can be run from search".to_string())
    })?;

    let results = fetch_json_rows(&state.pool, &statement, state.settings.search.max_rows)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Error executing query: {e}")))?;
    tracing::info!("query returned {} rows", results.len());

    let explanation = state.translator.explain(query, &results).await;

    if let Err(e) = searches::record(&state.pool, current.id()?, query, &sql, results.len()).await {
        tracing::warn!("could not record search history: {}", e);
    }

    Ok(Json(SearchResponse {
        query: query.to_string(),
        sql_query: sql,
        results,
        explanation,
    }))
}

pub async fn history(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<SearchHistoryItem>>, ApiError> {
    let items = searches::recent(&state.pool, current.id()?).await?;
    Ok(Json(items))
}
