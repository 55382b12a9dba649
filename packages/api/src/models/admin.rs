use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminCommandRequest {
    pub command: String,
}

/// SQL generated for an admin command. Nothing has been executed yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminCommandResponse {
    pub command: String,
    pub sql_query: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecuteRequest {
    pub sql_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecuteResponse {
    pub message: String,
    pub rows_affected: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableInfo {
    pub name: String,
    pub row_count: i64,
}

/// Which table a CSV upload targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Airports,
    Flights,
}

impl UploadKind {
    pub const ALL: [UploadKind; 2] = [UploadKind::Airports, UploadKind::Flights];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Airports => "airports",
            UploadKind::Flights => "flights",
        }
    }

    pub fn parse(s: &str) -> Option<UploadKind> {
        match s {
            "airports" => Some(UploadKind::Airports),
            "flights" => Some(UploadKind::Flights),
            _ => None,
        }
    }

    /// Header line shown in the import dialog.
    pub fn expected_columns(&self) -> &'static str {
        match self {
            UploadKind::Airports => {
                "code,name,city,country,latitude,longitude,timezone[,terminal_count,runway_count,description]"
            }
            UploadKind::Flights => {
                "flight_number,airline,departure_airport,arrival_airport,departure_time,arrival_time[,duration,status,gate,terminal,price]"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub message: String,
    pub inserted: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Error payload of every failed API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Public facts the sign-in screens need before anyone is logged in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppInfo {
    pub translator: String,
    pub allow_admin_registration: bool,
    pub demo_users: bool,
}
