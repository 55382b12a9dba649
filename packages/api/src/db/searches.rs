//! Server-side search history and table statistics.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SearchHistoryItem, TableInfo};

/// Tables listed in the admin overview.
pub const APP_TABLES: [&str; 6] = [
    "airports",
    "flights",
    "airlines",
    "aircraft_types",
    "users",
    "search_history",
];

pub const RECENT_SEARCHES: i64 = 50;

pub async fn record(
    pool: &PgPool,
    user_id: Uuid,
    query: &str,
    sql: &str,
    result_count: usize,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO search_history (user_id, query, generated_sql, result_count) VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(query)
    .bind(sql)
    .bind(i32::try_from(result_count).unwrap_or(i32::MAX))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn recent(pool: &PgPool, user_id: Uuid) -> Result<Vec<SearchHistoryItem>, sqlx::Error> {
    let rows: Vec<(i32, String, String, i32, chrono::DateTime<chrono::Utc>)> = sqlx::query_as(
        r#"
        SELECT id, query, generated_sql, result_count, created_at
        FROM search_history
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(RECENT_SEARCHES)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, query, sql_query, result_count, created_at)| SearchHistoryItem {
            id,
            query,
            sql_query,
            result_count,
            created_at,
        })
        .collect())
}

pub async fn table_counts(pool: &PgPool) -> Result<Vec<TableInfo>, sqlx::Error> {
    let mut tables = Vec::with_capacity(APP_TABLES.len());
    for name in APP_TABLES {
        // Names come from the fixed list above
        let (row_count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {name}"))
            .fetch_one(pool)
            .await?;
        tables.push(TableInfo {
            name: name.to_string(),
            row_count,
        });
    }
    Ok(tables)
}
