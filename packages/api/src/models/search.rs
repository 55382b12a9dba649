use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::ResultRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub query: String,
}

/// Generated SQL, the rows it returned and a plain-language summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub sql_query: String,
    pub results: Vec<ResultRow>,
    pub explanation: String,
}

/// Server-side record of a past search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHistoryItem {
    pub id: i32,
    pub query: String,
    pub sql_query: String,
    pub result_count: i32,
    pub created_at: DateTime<Utc>,
}
