//! Keyword rules that turn a question or command into SQL without a model.

pub const DEFAULT_SEARCH_SQL: &str = "SELECT * FROM airports LIMIT 5";
pub const DEFAULT_AIRPORT_NAME: &str = "New Airport";

/// SQL for a dashboard question.
pub fn search_sql(query: &str) -> String {
    let q = query.to_lowercase();

    let sql = if q.contains("airport") {
        DEFAULT_SEARCH_SQL
    } else if q.contains("america") || q.contains("usa") {
        "SELECT * FROM airports WHERE country = 'USA'"
    } else if q.contains("evening") && q.contains("flight") {
        "SELECT * FROM flights \
         WHERE EXTRACT(HOUR FROM departure_time) >= 17 \
         AND EXTRACT(HOUR FROM departure_time) <= 23"
    } else if q.contains("flight") {
        "SELECT * FROM flights LIMIT 5"
    } else {
        "SELECT * FROM flights WHERE departure_time >= CURRENT_DATE ORDER BY departure_time ASC"
    };
    sql.to_string()
}

/// SQL for an admin command. Never executed here.
pub fn admin_sql(command: &str) -> String {
    let lower = command.to_lowercase();

    if lower.contains("add") || lower.contains("new airport") {
        let name = airport_name(command).unwrap_or_else(|| DEFAULT_AIRPORT_NAME.to_string());
        format!(
            "INSERT INTO airports (code, name, city, country, timezone)\n\
             VALUES ('XYZ', '{}', 'New City', 'Country', 'GMT+0');",
            name.replace('\'', "''")
        )
    } else if lower.contains("update") {
        "UPDATE airports\nSET timezone = 'GMT+1'\nWHERE code = 'JFK';".to_string()
    } else if lower.contains("delete") {
        "DELETE FROM flights\nWHERE flight_number = 'XX000';".to_string()
    } else {
        "SELECT * FROM airports WHERE country = 'USA';".to_string()
    }
}

/// Summary line for a result set.
pub fn explain(query: &str, result_count: usize) -> String {
    format!("Found {result_count} results for your query: {query}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Byte offsets in `haystack` where the ASCII `needle` starts, ignoring case.
fn match_offsets<'a>(haystack: &'a str, needle: &'a str) -> impl DoubleEndedIterator<Item = usize> + 'a {
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .filter(move |&i| {
            haystack
                .get(i..i + needle.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(needle))
        })
}

/// Name from "add <name> airport" or "new airport <name>". Keywords match
/// case-insensitively, the name keeps its original case.
fn airport_name(command: &str) -> Option<String> {
    if let Some(start) = match_offsets(command, "add ").next() {
        let from = start + "add ".len();
        let rest = &command[from..];
        if let Some(end) = match_offsets(rest, " airport").next_back() {
            let name = &rest[..end];
            if !name.trim().is_empty() && name.chars().all(is_word_char) {
                return Some(name.trim().to_string());
            }
        }
    }

    if let Some(start) = match_offsets(command, "new airport ").next() {
        let rest = &command[start + "new airport ".len()..];
        let name: String = rest.chars().take_while(|c| is_word_char(*c)).collect();
        if !name.trim().is_empty() {
            return Some(name.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_rules() {
        assert_eq!(search_sql("Show me all airports"), DEFAULT_SEARCH_SQL);
        assert_eq!(
            search_sql("What is in America?"),
            "SELECT * FROM airports WHERE country = 'USA'"
        );
        assert!(search_sql("evening FLIGHTS please").contains("EXTRACT(HOUR FROM departure_time) >= 17"));
        assert_eq!(search_sql("flights"), "SELECT * FROM flights LIMIT 5");
        assert!(search_sql("what's next?").contains("ORDER BY departure_time ASC"));
    }

    #[test]
    fn test_airport_rule_wins_over_country() {
        // "airport" is checked first
        assert_eq!(search_sql("airports in the USA"), DEFAULT_SEARCH_SQL);
    }

    #[test]
    fn test_admin_add_airport_extracts_name() {
        let sql = admin_sql("add Denver International airport");
        assert!(sql.starts_with("INSERT INTO airports"));
        assert!(sql.contains("'Denver International'"));

        let sql = admin_sql("Create a new airport Gatwick");
        assert!(sql.contains("'Gatwick'"));
    }

    #[test]
    fn test_admin_add_without_name_uses_default() {
        let sql = admin_sql("add something");
        assert!(sql.contains("'New Airport'"));
    }

    #[test]
    fn test_admin_add_with_non_ascii_text() {
        // Lowercasing "İ" and "ẞ" changes their byte lengths
        let sql = admin_sql("İnew airport ẞ");
        assert!(sql.contains("'ẞ'"));

        let sql = admin_sql("ADD Zürich Kloten AIRPORT");
        assert!(sql.contains("'Zürich Kloten'"));

        let sql = admin_sql("İİ add ẞẞ");
        assert!(sql.contains("'New Airport'"));
    }

    #[test]
    fn test_admin_other_rules() {
        assert!(admin_sql("update JFK").starts_with("UPDATE airports"));
        assert!(admin_sql("delete old route").starts_with("DELETE FROM flights"));
        assert_eq!(
            admin_sql("list everything"),
            "SELECT * FROM airports WHERE country = 'USA';"
        );
    }

    #[test]
    fn test_explain() {
        assert_eq!(explain("airports", 5), "Found 5 results for your query: airports");
    }
}
