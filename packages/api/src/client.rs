//! # HTTP client for the REST API
//!
//! [`ApiClient`] is what the UI talks to. It works in the browser (reqwest's
//! fetch backend) and natively. Every request carries
//! `Authorization: Bearer <token>` once a token is set. Failures come back as
//! [`ClientError`]; a 401 is always [`ClientError::Unauthorized`] so callers
//! can drop the stored session.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    AdminCommandRequest, AdminCommandResponse, AuthResponse, CreateUserRequest, ErrorBody,
    ExecuteRequest, ExecuteResponse, LoginRequest, RegisterRequest, SearchHistoryItem,
    SearchRequest, SearchResponse, TableInfo, UploadKind, UploadResponse, UserInfo,
};

pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Map a non-success response to an error, preferring the `detail` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED.as_u16() {
            return ClientError::Unauthorized;
        }
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.detail)
            .ok()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && text.len() <= 200).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ClientError::Api { status, detail }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// `base_url` is the origin serving the API, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ClientError> {
        let res = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(ClientError::from_status(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        Self::send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Self::json(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        Self::json(self.request(Method::POST, path).json(body)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/token", &body).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.post("/auth/register", req).await
    }

    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        self.get("/auth/me").await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let body = SearchRequest {
            query: query.to_string(),
        };
        self.post("/search", &body).await
    }

    pub async fn search_history(&self) -> Result<Vec<SearchHistoryItem>, ClientError> {
        self.get("/search/history").await
    }

    pub async fn admin_command(&self, command: &str) -> Result<AdminCommandResponse, ClientError> {
        let body = AdminCommandRequest {
            command: command.to_string(),
        };
        self.post("/admin/command", &body).await
    }

    pub async fn admin_execute(&self, sql_query: &str) -> Result<ExecuteResponse, ClientError> {
        let body = ExecuteRequest {
            sql_query: sql_query.to_string(),
        };
        self.post("/admin/execute", &body).await
    }

    pub async fn tables(&self) -> Result<Vec<TableInfo>, ClientError> {
        self.get("/admin/tables").await
    }

    pub async fn users(&self) -> Result<Vec<UserInfo>, ClientError> {
        self.get("/admin/users").await
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<UserInfo, ClientError> {
        self.post("/admin/users", req).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        Self::send(self.request(Method::DELETE, &format!("/admin/users/{id}"))).await?;
        Ok(())
    }

    pub async fn upload(&self, kind: UploadKind, csv: String) -> Result<UploadResponse, ClientError> {
        let builder = self
            .request(Method::POST, &format!("/admin/upload/{}", kind.as_str()))
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .body(csv);
        Self::json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_mapping() {
        assert_eq!(
            ClientError::from_status(401, r#"{"detail":"Token has expired"}"#),
            ClientError::Unauthorized
        );
        assert!(ClientError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn test_detail_is_preferred() {
        assert_eq!(
            ClientError::from_status(409, r#"{"detail":"Email already registered"}"#),
            ClientError::Api {
                status: 409,
                detail: "Email already registered".to_string()
            }
        );
        assert_eq!(
            ClientError::from_status(403, r#"{"detail":"Not enough permissions"}"#).to_string(),
            "Not enough permissions"
        );
    }

    #[test]
    fn test_fallback_detail() {
        assert_eq!(
            ClientError::from_status(502, "Bad Gateway"),
            ClientError::Api {
                status: 502,
                detail: "Bad Gateway".to_string()
            }
        );
        assert_eq!(
            ClientError::from_status(500, ""),
            ClientError::Api {
                status: 500,
                detail: "Request failed with status 500".to_string()
            }
        );
    }

    #[test]
    fn test_urls_and_token() {
        let client = ApiClient::new("http://localhost:8080/").with_token(Some(String::new()));
        assert_eq!(client.url("/search"), "http://localhost:8080/api/v1/search");
        assert!(client.token().is_none());

        let client = client.with_token(Some("abc".to_string()));
        assert_eq!(client.token(), Some("abc"));
    }
}
