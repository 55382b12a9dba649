//! Generated SQL panel with keyword highlighting and copy to clipboard.

use std::time::Duration;

use dioxus::prelude::*;

use crate::browser::{copy_to_clipboard, sleep};
use crate::icons::{FaCheck, FaCopy};
use crate::Icon;

/// Highlighted words. `GROUP BY` and `ORDER BY` only count as a pair.
pub const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "JOIN", "AND", "OR", "GROUP BY", "ORDER BY", "LIMIT", "INSERT",
    "UPDATE", "DELETE", "CREATE", "DROP", "ALTER", "INTO", "VALUES", "SET", "AS", "ON", "INNER",
    "LEFT", "RIGHT", "OUTER", "USING", "HAVING",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SqlSegment {
    pub text: String,
    pub keyword: bool,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `sql` into alternating runs of word and non-word characters.
fn runs(sql: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in sql.char_indices() {
        let word = is_word_char(c);
        match current {
            Some(prev) if prev != word => {
                runs.push((&sql[start..i], prev));
                start = i;
                current = Some(word);
            }
            Some(_) => {}
            None => current = Some(word),
        }
    }
    if let Some(prev) = current {
        runs.push((&sql[start..], prev));
    }
    runs
}

fn push_segment(segments: &mut Vec<SqlSegment>, text: &str, keyword: bool) {
    if !keyword {
        if let Some(last) = segments.last_mut().filter(|s| !s.keyword) {
            last.text.push_str(text);
            return;
        }
    }
    segments.push(SqlSegment {
        text: text.to_string(),
        keyword,
    });
}

/// Tokenize SQL into keyword and plain segments, case-insensitively. The
/// original text is preserved; concatenating the segments gives `sql` back.
pub fn highlight_sql(sql: &str) -> Vec<SqlSegment> {
    let runs = runs(sql);
    let mut segments = Vec::new();
    let mut i = 0;

    while i < runs.len() {
        let (text, word) = runs[i];
        if word {
            let upper = text.to_ascii_uppercase();
            if matches!(upper.as_str(), "GROUP" | "ORDER") {
                if let (Some(&(gap, _)), Some(&(next, true))) = (runs.get(i + 1), runs.get(i + 2)) {
                    if gap.chars().all(char::is_whitespace) && next.eq_ignore_ascii_case("BY") {
                        push_segment(&mut segments, &format!("{text}{gap}{next}"), true);
                        i += 3;
                        continue;
                    }
                }
            } else if SQL_KEYWORDS.contains(&upper.as_str()) {
                push_segment(&mut segments, text, true);
                i += 1;
                continue;
            }
        }
        push_segment(&mut segments, text, false);
        i += 1;
    }

    segments
}

#[component]
pub fn SqlDisplay(sql: String) -> Element {
    let mut copied = use_signal(|| false);
    let segments = highlight_sql(&sql);

    let on_copy = move |_| {
        copy_to_clipboard(&sql);
        copied.set(true);
        spawn(async move {
            sleep(Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "sql-display",
            div { class: "sql-display-header",
                span { "Generated SQL Query" }
                button {
                    class: "button",
                    "data-style": "ghost",
                    "data-size": "sm",
                    onclick: on_copy,
                    if copied() {
                        Icon { icon: FaCheck, width: 12, height: 12 }
                        "Copied"
                    } else {
                        Icon { icon: FaCopy, width: 12, height: 12 }
                        "Copy"
                    }
                }
            }
            pre {
                for segment in segments {
                    if segment.keyword {
                        span { class: "query-highlight", "{segment.text}" }
                    } else {
                        "{segment.text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(sql: &str) -> Vec<String> {
        highlight_sql(sql)
            .into_iter()
            .filter(|s| s.keyword)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_highlights_keywords_case_insensitively() {
        assert_eq!(
            keywords("select * from airports where country = 'USA'"),
            vec!["select", "from", "where"]
        );
    }

    #[test]
    fn test_segments_reassemble_input() {
        let sql = "SELECT f.flight_number, a.name\nFROM flights f JOIN airlines a ON a.id = f.airline_id LIMIT 10;";
        let joined: String = highlight_sql(sql).into_iter().map(|s| s.text).collect();
        assert_eq!(joined, sql);
    }

    #[test]
    fn test_plain_text_is_merged() {
        let segments = highlight_sql("SELECT * FROM airports");
        assert_eq!(
            segments,
            vec![
                SqlSegment { text: "SELECT".into(), keyword: true },
                SqlSegment { text: " * ".into(), keyword: false },
                SqlSegment { text: "FROM".into(), keyword: true },
                SqlSegment { text: " airports".into(), keyword: false },
            ]
        );
    }

    #[test]
    fn test_group_and_order_need_by() {
        assert_eq!(
            keywords("SELECT city FROM airports GROUP BY city ORDER  BY city"),
            vec!["SELECT", "FROM", "GROUP BY", "ORDER  BY"]
        );
        // Lone BY and ORDER are not keywords
        assert_eq!(keywords("SELECT order_id, by FROM orders"), vec!["SELECT", "FROM"]);
    }

    #[test]
    fn test_keywords_inside_identifiers_are_ignored() {
        assert_eq!(keywords("SELECT created_at, selection FROM aircraft_types"), vec!["SELECT", "FROM"]);
    }
}
