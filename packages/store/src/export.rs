//! # CSV export
//!
//! Result tables and the query history can be downloaded as CSV. Every field
//! is quoted and embedded quotes are doubled (RFC 4180); records end with
//! `\n`. Headers of a result table are the keys of its first row, so rows
//! missing a column export an empty cell.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;

use crate::models::{HistoryEntry, ResultRow};

const HISTORY_HEADERS: [&str; 4] = ["query", "sql", "timestamp", "resultCount"];

/// Render a JSON cell the way the results table shows it.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Column names of a result set, taken from its first row.
pub fn result_headers(rows: &[ResultRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Serialize a header line plus records.
pub fn to_csv<H, R>(headers: &[H], records: R) -> Result<String, csv::Error>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buf);

        writer.write_record(headers.iter().map(|h| h.as_ref()))?;
        for record in records {
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// CSV of a search result. Empty input yields an empty string.
pub fn rows_to_csv(rows: &[ResultRow]) -> Result<String, csv::Error> {
    if rows.is_empty() {
        return Ok(String::new());
    }
    let headers = result_headers(rows);
    let records = rows.iter().map(|row| {
        headers
            .iter()
            .map(|h| cell_text(row.get(h)))
            .collect::<Vec<_>>()
    });
    to_csv(&headers[..], records)
}

/// CSV of the query history. Empty input yields an empty string.
pub fn history_to_csv(entries: &[HistoryEntry]) -> Result<String, csv::Error> {
    if entries.is_empty() {
        return Ok(String::new());
    }
    let records = entries.iter().map(|e| {
        vec![
            e.query.clone(),
            e.sql.clone(),
            e.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            e.result_count.to_string(),
        ]
    });
    to_csv(&HISTORY_HEADERS[..], records)
}

/// `<prefix>-YYYY-MM-DD.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn row(value: Value) -> ResultRow {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![row(json!({"name": "O'Hare \"ORD\"", "code": "ORD"}))];
        let csv = rows_to_csv(&rows).unwrap();
        assert_eq!(csv, "\"name\",\"code\"\n\"O'Hare \"\"ORD\"\"\",\"ORD\"\n");
    }

    #[test]
    fn test_headers_follow_first_row_order() {
        let rows = vec![
            row(json!({"id": 1, "code": "JFK", "city": "New York"})),
            row(json!({"id": 2, "code": "LAX"})),
        ];
        assert_eq!(result_headers(&rows), vec!["id", "code", "city"]);

        let csv = rows_to_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"id\",\"code\",\"city\"");
        assert_eq!(lines[1], "\"1\",\"JFK\",\"New York\"");
        // Missing column exports empty
        assert_eq!(lines[2], "\"2\",\"LAX\",\"\"");
    }

    #[test]
    fn test_cells_with_commas_and_newlines() {
        let rows = vec![row(json!({"description": "Terminal 1,\nnorth side", "gate": null}))];
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.contains("\"Terminal 1,\nnorth side\",\"\""));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(Some(&json!("JFK"))), "JFK");
        assert_eq!(cell_text(Some(&json!(0))), "0");
        assert_eq!(cell_text(Some(&json!(412.5))), "412.5");
        assert_eq!(cell_text(Some(&json!(false))), "false");
    }

    #[test]
    fn test_empty_exports() {
        assert_eq!(rows_to_csv(&[]).unwrap(), "");
        assert_eq!(history_to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_history_csv() {
        let entry = HistoryEntry {
            query: "say \"hi\"".to_string(),
            sql: "SELECT * FROM airports LIMIT 5".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 4, 25, 8, 30, 0).unwrap(),
            result_count: 5,
        };
        let csv = history_to_csv(&[entry]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"query\",\"sql\",\"timestamp\",\"resultCount\"");
        assert_eq!(
            lines[1],
            "\"say \"\"hi\"\"\",\"SELECT * FROM airports LIMIT 5\",\"2025-04-25T08:30:00.000Z\",\"5\""
        );
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert_eq!(
            export_filename("sky-scribe-results", date),
            "sky-scribe-results-2025-04-05.csv"
        );
    }
}
