//! # CSV data import
//!
//! Admins can bulk-load airports and flights. The whole file is parsed and
//! validated before the first insert, then every row goes in one transaction,
//! so a bad file changes nothing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("the file has no data rows")]
    Empty,
    #[error("line {line}: {message}")]
    Row { line: u64, message: String },
    #[error("unknown airport code '{0}'")]
    UnknownAirport(String),
    #[error("unknown airline code '{0}'")]
    UnknownAirline(String),
    #[error("error importing rows: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        let message = match e.kind() {
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => e.to_string(),
        };
        ImportError::Row { line, message }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(default)]
    pub terminal_count: Option<i32>,
    #[serde(default)]
    pub runway_count: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(deserialize_with = "timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(deserialize_with = "timestamp")]
    pub arrival_time: NaiveDateTime,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default)]
    pub terminal: Option<i32>,
    #[serde(default)]
    pub price: Option<f64>,
}

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse `YYYY-MM-DD[T| ]HH:MM[:SS]`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

fn parse<T: serde::de::DeserializeOwned>(text: &str) -> Result<Vec<T>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    if records.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(records)
}

pub fn parse_airports(text: &str) -> Result<Vec<AirportRecord>, ImportError> {
    let mut records: Vec<AirportRecord> = parse(text)?;
    for r in &mut records {
        r.code = r.code.to_uppercase();
    }
    Ok(records)
}

pub fn parse_flights(text: &str) -> Result<Vec<FlightRecord>, ImportError> {
    let mut records: Vec<FlightRecord> = parse(text)?;
    for r in &mut records {
        r.airline = r.airline.to_uppercase();
        r.departure_airport = r.departure_airport.to_uppercase();
        r.arrival_airport = r.arrival_airport.to_uppercase();
    }
    Ok(records)
}

pub async fn insert_airports(pool: &PgPool, records: &[AirportRecord]) -> Result<u64, ImportError> {
    let mut tx = pool.begin().await?;
    for r in records {
        sqlx::query(
            r#"
            INSERT INTO airports
                (code, name, city, country, latitude, longitude, timezone, terminal_count, runway_count, description)
            VALUES ($1, $2, $3, $4, $5::float8::numeric, $6::float8::numeric, $7, $8, $9, $10)
            "#,
        )
        .bind(&r.code)
        .bind(&r.name)
        .bind(&r.city)
        .bind(&r.country)
        .bind(r.latitude)
        .bind(r.longitude)
        .bind(&r.timezone)
        .bind(r.terminal_count)
        .bind(r.runway_count)
        .bind(&r.description)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(records.len() as u64)
}

pub async fn insert_flights(pool: &PgPool, records: &[FlightRecord]) -> Result<u64, ImportError> {
    let mut tx = pool.begin().await?;
    for r in records {
        let airline: Option<(i32,)> = sqlx::query_as("SELECT id FROM airlines WHERE code = $1")
            .bind(&r.airline)
            .fetch_optional(&mut *tx)
            .await?;
        let (airline_id,) = airline.ok_or_else(|| ImportError::UnknownAirline(r.airline.clone()))?;

        let mut airport_ids = [0i32; 2];
        for (slot, code) in airport_ids
            .iter_mut()
            .zip([&r.departure_airport, &r.arrival_airport])
        {
            let found: Option<(i32,)> = sqlx::query_as("SELECT id FROM airports WHERE code = $1")
                .bind(code)
                .fetch_optional(&mut *tx)
                .await?;
            *slot = found.ok_or_else(|| ImportError::UnknownAirport(code.clone()))?.0;
        }

        sqlx::query(
            r#"
            INSERT INTO flights
                (flight_number, airline_id, departure_airport_id, arrival_airport_id,
                 departure_time, arrival_time, duration, status, gate, terminal, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11::float8::numeric)
            "#,
        )
        .bind(&r.flight_number)
        .bind(airline_id)
        .bind(airport_ids[0])
        .bind(airport_ids[1])
        .bind(r.departure_time)
        .bind(r.arrival_time)
        .bind(r.duration)
        .bind(&r.status)
        .bind(&r.gate)
        .bind(r.terminal)
        .bind(r.price)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(records.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_airports_with_optional_columns() {
        let text = "code,name,city,country,latitude,longitude,timezone,terminal_count\n\
                    den,Denver International Airport,Denver,USA,39.8561,-104.6737,GMT-7,1\n\
                    SFO,San Francisco International Airport,San Francisco,USA,37.6213,-122.379,GMT-8,\n";
        let records = parse_airports(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "DEN");
        assert_eq!(records[0].terminal_count, Some(1));
        assert_eq!(records[1].terminal_count, None);
        assert_eq!(records[1].description, None);
    }

    #[test]
    fn test_parse_airports_reports_line() {
        let text = "code,name,city,country,latitude,longitude,timezone\n\
                    JFK,Kennedy,New York,USA,north,-73.7,GMT-5\n";
        match parse_airports(text) {
            Err(ImportError::Row { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_flights() {
        let text = "flight_number,airline,departure_airport,arrival_airport,departure_time,arrival_time,price\n\
                    AA124,aa,jfk,lax,2025-05-01T08:30:00,2025-05-01 11:45,399.5\n";
        let records = parse_flights(text).unwrap();
        assert_eq!(records[0].airline, "AA");
        assert_eq!(records[0].arrival_airport, "LAX");
        assert_eq!(records[0].price, Some(399.5));
        assert_eq!(
            records[0].arrival_time,
            parse_timestamp("2025-05-01T11:45:00").unwrap()
        );
    }

    #[test]
    fn test_parse_flights_bad_timestamp() {
        let text = "flight_number,airline,departure_airport,arrival_airport,departure_time,arrival_time\n\
                    AA124,AA,JFK,LAX,tomorrow,2025-05-01 11:45\n";
        let err = parse_flights(text).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp 'tomorrow'"));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        assert!(matches!(
            parse_airports("code,name,city,country,latitude,longitude,timezone\n"),
            Err(ImportError::Empty)
        ));
    }
}
