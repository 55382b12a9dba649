//! # Running generated SQL
//!
//! Search SQL must be one `SELECT`/`WITH` statement. It runs inside a
//! `READ ONLY` transaction and is wrapped in `row_to_json` so PostgreSQL does
//! the value conversion: numerics become JSON numbers, timestamps ISO strings,
//! and column order is preserved. Admin SQL is one statement of any kind,
//! committed in its own transaction.

use sqlx::PgPool;
use store::ResultRow;

/// Trimmed statement without trailing semicolons and leading comments.
pub fn normalize_statement(sql: &str) -> String {
    let mut rest = sql.trim();
    loop {
        if let Some(line_comment) = rest.strip_prefix("--") {
            rest = line_comment.split_once('\n').map(|(_, r)| r).unwrap_or("").trim_start();
        } else if let Some(block) = rest.strip_prefix("/*") {
            rest = block.split_once("*/").map(|(_, r)| r).unwrap_or("").trim_start();
        } else {
            break;
        }
    }
    rest.trim_end_matches(|c: char| c == ';' || c.is_whitespace())
        .to_string()
}

/// The statement to run for a search, or `None` if it is not a single
/// read-only query.
pub fn read_only_statement(sql: &str) -> Option<String> {
    let statement = normalize_statement(sql);
    if statement.is_empty() || statement.contains(';') {
        return None;
    }
    let first = statement
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase();
    matches!(first.as_str(), "SELECT" | "WITH").then_some(statement)
}

/// The search statement wrapped so every row comes back as one JSON object.
/// The statement sits on its own lines so a trailing `--` comment stays closed.
pub fn json_rows_query(statement: &str, max_rows: i64) -> String {
    format!("SELECT row_to_json(q)::text FROM (\n{statement}\n) AS q LIMIT {max_rows}")
}

/// Run a read-only query and return at most `max_rows` rows.
pub async fn fetch_json_rows(
    pool: &PgPool,
    statement: &str,
    max_rows: i64,
) -> Result<Vec<ResultRow>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION READ ONLY")
        .execute(&mut *tx)
        .await?;

    let wrapped = json_rows_query(statement, max_rows);
    let rows: Vec<(String,)> = sqlx::query_as(&wrapped).fetch_all(&mut *tx).await?;
    tx.rollback().await?;

    rows.into_iter()
        .map(|(json,)| serde_json::from_str::<ResultRow>(&json))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Run one statement and commit. Returns the affected row count.
pub async fn execute_statement(pool: &PgPool, statement: &str) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(statement).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_statements() {
        assert_eq!(
            read_only_statement("SELECT * FROM airports;").as_deref(),
            Some("SELECT * FROM airports")
        );
        assert!(read_only_statement("  with x as (select 1) select * from x").is_some());
        assert!(read_only_statement("-- airports\nSELECT code FROM airports").is_some());
        assert!(read_only_statement("(SELECT 1)").is_none());
        assert!(read_only_statement("select(1)").is_some());
    }

    #[test]
    fn test_rejects_writes_and_batches() {
        assert!(read_only_statement("DELETE FROM flights").is_none());
        assert!(read_only_statement("UPDATE airports SET timezone = 'GMT'").is_none());
        assert!(read_only_statement("SELECT 1; DROP TABLE users").is_none());
        assert!(read_only_statement("/* hi */ INSERT INTO airports VALUES (1)").is_none());
        assert!(read_only_statement("").is_none());
        assert!(read_only_statement(";;").is_none());
    }

    #[test]
    fn test_trailing_line_comment_stays_inside_wrapper() {
        let statement = read_only_statement("SELECT * FROM airports -- first five").unwrap();
        let wrapped = json_rows_query(&statement, 500);
        assert_eq!(
            wrapped,
            "SELECT row_to_json(q)::text FROM (\nSELECT * FROM airports -- first five\n) AS q LIMIT 500"
        );
        assert!(wrapped.lines().last().unwrap().starts_with(") AS q LIMIT 500"));
    }

    #[test]
    fn test_normalize_statement() {
        assert_eq!(normalize_statement("  UPDATE a SET b = 1 ;\n"), "UPDATE a SET b = 1");
        assert_eq!(normalize_statement("/* c */ -- d\nSELECT 1"), "SELECT 1");
    }
}
