//! # Client-side view models
//!
//! The three shapes the browser keeps between page loads. All of them are
//! `Serialize + Deserialize` because they are persisted as JSON blobs in a
//! [`crate::KeyValueStore`] and, for [`Role`], also travel over the wire in
//! `api` responses.
//!
//! | Type | Stored under | Notes |
//! |------|--------------|-------|
//! | [`SessionUser`] | `"user"` | Signed-in identity. No expiry or integrity check. |
//! | [`HistoryEntry`] | `"queryHistory"` (array) | Camel-cased JSON keys (`resultCount`). |
//! | [`ResultRow`] | never stored | Ordered column → value map returned by a search. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One result row: column name to value, in the order the backend produced.
pub type ResultRow = serde_json::Map<String, serde_json::Value>;

/// Account role. Serialized lowercase (`"user"`, `"admin"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored role name. Unknown names are rejected.
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as remembered by the browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A query the user ran from the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Natural-language text as typed
    pub query: String,
    /// SQL the backend generated for it
    pub sql: String,
    pub timestamp: DateTime<Utc>,
    pub result_count: usize,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn now(query: impl Into<String>, sql: impl Into<String>, result_count: usize) -> Self {
        Self {
            query: query.into(),
            sql: sql.into(),
            timestamp: Utc::now(),
            result_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
        assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
        assert_eq!(Role::parse("manager"), None);
    }

    #[test]
    fn test_history_entry_uses_camel_case_keys() {
        let entry = HistoryEntry::now("flights to paris", "SELECT 1", 3);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["resultCount"], 3);
        assert_eq!(json["sql"], "SELECT 1");
        assert!(json.get("result_count").is_none());
    }
}
