//! Chat-completions client for the `openai` translator backend.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::ResultRow;

use super::rules::DEFAULT_SEARCH_SQL;
use super::TranslatorError;

pub const SCHEMA_INFO: &str = "\
Database schema (PostgreSQL):

airlines(id SERIAL PRIMARY KEY, code VARCHAR(10) UNIQUE, name, country, logo_url, website_url)
aircraft_types(id SERIAL PRIMARY KEY, code VARCHAR(10) UNIQUE, manufacturer, model, capacity INTEGER, range_km INTEGER)
airports(id SERIAL PRIMARY KEY, code VARCHAR(10) UNIQUE, name, city, country, latitude NUMERIC, longitude NUMERIC, timezone, terminal_count INTEGER, runway_count INTEGER, description TEXT)
flights(id SERIAL PRIMARY KEY, flight_number VARCHAR(20), airline_id -> airlines.id, departure_airport_id -> airports.id, arrival_airport_id -> airports.id, departure_time TIMESTAMP, arrival_time TIMESTAMP, duration INTEGER minutes, aircraft_type_id -> aircraft_types.id, status VARCHAR(50), gate VARCHAR(10), terminal INTEGER, price NUMERIC)
";

const SQL_TEMPERATURE: f32 = 0.1;
const EXPLAIN_TEMPERATURE: f32 = 0.7;
/// Rows included in an explanation prompt.
const EXPLAIN_SAMPLE_ROWS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

impl Message {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiTranslator {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self, TranslatorError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("sky-scribe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TranslatorError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn search_sql(&self, query: &str) -> Result<String, TranslatorError> {
        let prompt = format!(
            "{SCHEMA_INFO}\nConvert this natural language query to a single PostgreSQL SELECT statement:\n{query}\n\n\
             Return ONLY the SQL query. If the query is unclear, return '{DEFAULT_SEARCH_SQL}'."
        );
        let reply = self
            .complete(
                vec![
                    Message::system("You are a SQL expert. Convert natural language to SQL queries. Return ONLY the SQL query, nothing else."),
                    Message::user(prompt),
                ],
                SQL_TEMPERATURE,
            )
            .await?;
        Ok(search_sql_or_default(&reply))
    }

    pub async fn admin_sql(&self, command: &str) -> Result<String, TranslatorError> {
        let prompt = format!(
            "{SCHEMA_INFO}\nConvert this natural language command to a single PostgreSQL statement:\n{command}\n\n\
             Provide only the SQL query without any explanations."
        );
        let reply = self
            .complete(
                vec![
                    Message::system("You are a SQL expert. Convert natural language to SQL queries for database modifications."),
                    Message::user(prompt),
                ],
                SQL_TEMPERATURE,
            )
            .await?;
        let sql = strip_fences(&reply);
        if sql.is_empty() {
            return Err(TranslatorError::EmptyReply);
        }
        Ok(sql)
    }

    pub async fn explain(&self, query: &str, rows: &[ResultRow]) -> Result<String, TranslatorError> {
        let sample: Vec<&ResultRow> = rows.iter().take(EXPLAIN_SAMPLE_ROWS).collect();
        let results = serde_json::to_string_pretty(&sample)
            .map_err(|e| TranslatorError::Decode(e.to_string()))?;
        let prompt = format!(
            "Explain these query results in natural language:\nQuery: {query}\nTotal rows: {}\nResults: {results}\n\n\
             Provide a clear and concise explanation of what these results mean.",
            rows.len()
        );
        self.complete(
            vec![
                Message::system("You are a helpful assistant explaining database query results."),
                Message::user(prompt),
            ],
            EXPLAIN_TEMPERATURE,
        )
        .await
    }

    async fn complete(&self, messages: Vec<Message>, temperature: f32) -> Result<String, TranslatorError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature,
        };

        let res = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslatorError::Transport(e.to_string()))?;

        match res.status() {
            s if s.is_success() => {
                let body: ChatResponse = res
                    .json()
                    .await
                    .map_err(|e| TranslatorError::Decode(e.to_string()))?;
                body.choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content.trim().to_string())
                    .ok_or(TranslatorError::EmptyReply)
            }
            StatusCode::UNAUTHORIZED => Err(TranslatorError::InvalidApiKey),
            s => {
                let status = s.as_u16();
                let body = res.text().await.unwrap_or_default();
                Err(TranslatorError::Http {
                    status,
                    body: error_message(&body),
                })
            }
        }
    }
}

/// Drop Markdown code fences around a model reply.
pub fn strip_fences(reply: &str) -> String {
    let mut sql = reply.trim();
    if let Some(rest) = sql.strip_prefix("```") {
        // Skip the info string ("sql", "postgresql", ...)
        sql = match rest.find('\n') {
            Some(i) => &rest[i + 1..],
            None => rest.strip_prefix("sql").unwrap_or(rest),
        };
    }
    if let Some(rest) = sql.trim_end().strip_suffix("```") {
        sql = rest;
    }
    sql.trim().to_string()
}

/// Search replies that do not look like SQL fall back to the default query.
pub fn search_sql_or_default(reply: &str) -> String {
    let sql = strip_fences(reply);
    let upper = sql.to_uppercase();
    let looks_like_sql = ["SELECT", "WITH", "INSERT", "UPDATE", "DELETE"]
        .iter()
        .any(|kw| upper.contains(kw));
    if looks_like_sql {
        sql
    } else {
        DEFAULT_SEARCH_SQL.to_string()
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_fences("```sql\nSELECT 1\n```"), "SELECT 1");
        assert_eq!(strip_fences("```\nSELECT 1;\n```\n"), "SELECT 1;");
        assert_eq!(strip_fences("```sqlSELECT 1```"), "SELECT 1");
        assert_eq!(strip_fences("  SELECT * FROM flights  "), "SELECT * FROM flights");
    }

    #[test]
    fn test_non_sql_reply_falls_back() {
        assert_eq!(
            search_sql_or_default("I'm not sure what you mean."),
            DEFAULT_SEARCH_SQL
        );
        assert_eq!(
            search_sql_or_default("```sql\nselect code from airports\n```"),
            "select code from airports"
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":{"message":"Rate limit reached"}}"#),
            "Rate limit reached"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4",
            messages: vec![Message::system("s"), Message::user("u")],
            temperature: SQL_TEMPERATURE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }
}
