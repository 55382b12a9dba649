//! Locally stored query history: search, inspect, export, clear. Below it,
//! the searches the server recorded for this account.

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use store::export::export_filename;
use store::history::filter_entries;
use store::{HistoryEntry, QueryHistory};
use ui::browser::{confirm, download, today, CSV_MIME};
use ui::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Spinner, ToastOptions,
};
use ui::icons::{FaClock, FaDatabase, FaDownload, FaMagnifyingGlass, FaTrash};
use ui::{expire_session, make_store, use_auth, Icon};

/// `Apr 25, 2025 08:30` in the visitor's timezone.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string()
}

fn saved_label(count: usize) -> String {
    match count {
        1 => "1 search saved to your account".to_string(),
        n => format!("{n} searches saved to your account"),
    }
}

#[component]
pub fn History() -> Element {
    let toast = use_toast();
    let mut entries = use_signal(Vec::<HistoryEntry>::new);
    let mut term = use_signal(String::new);
    let mut open_sql = use_signal(|| None::<usize>);

    use_effect(move || {
        entries.set(QueryHistory::new(make_store()).entries());
    });

    let filtered = filter_entries(&entries.read(), &term());
    let has_history = !entries.read().is_empty();

    let on_export = move |_| match QueryHistory::new(make_store()).to_csv() {
        Ok(csv) if !csv.is_empty() => {
            download(&export_filename("query-history", today()), CSV_MIME, &csv);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("History export failed: {}", e);
            toast.error("Could not export history".to_string(), ToastOptions::new());
        }
    };

    let on_clear = move |_| async move {
        if !confirm("Are you sure you want to clear all query history?").await {
            return;
        }
        QueryHistory::new(make_store()).clear();
        entries.set(Vec::new());
        open_sql.set(None);
        toast.success("History cleared".to_string(), ToastOptions::new());
    };

    rsx! {
        div { class: "page",
            div { class: "page-header with-actions",
                div {
                    h1 { "Query History" }
                    p { "View and manage your past queries" }
                }
                div { class: "actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        small: true,
                        disabled: !has_history,
                        onclick: on_export,
                        Icon { icon: FaDownload, width: 14, height: 14 }
                        "Export"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        small: true,
                        disabled: !has_history,
                        onclick: on_clear,
                        Icon { icon: FaTrash, width: 14, height: 14 }
                        "Clear History"
                    }
                }
            }

            Card {
                CardContent {
                    div { class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        Input {
                            placeholder: "Search queries...",
                            value: term(),
                            oninput: move |e: FormEvent| term.set(e.value()),
                        }
                    }

                    if filtered.is_empty() {
                        div { class: "empty-state",
                            Icon { icon: FaClock, width: 48, height: 48 }
                            h3 { "No query history found" }
                            p {
                                if has_history {
                                    "No matching queries in your history."
                                } else {
                                    "Your past queries will appear here."
                                }
                            }
                        }
                    } else {
                        div { class: "table-scroll",
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Date" }
                                        th { "Query" }
                                        th { "Results" }
                                        th { "SQL" }
                                    }
                                }
                                tbody {
                                    for (index, entry) in filtered.into_iter().enumerate() {
                                        tr {
                                            td { {format_timestamp(&entry.timestamp)} }
                                            td { class: "wrap", "{entry.query}" }
                                            td { class: "numeric", "{entry.result_count}" }
                                            td {
                                                Button {
                                                    variant: ButtonVariant::Outline,
                                                    small: true,
                                                    onclick: move |_| {
                                                        let next = if open_sql() == Some(index) { None } else { Some(index) };
                                                        open_sql.set(next);
                                                    },
                                                    Icon { icon: FaDatabase, width: 12, height: 12 }
                                                    if open_sql() == Some(index) { "Hide SQL" } else { "View SQL" }
                                                }
                                            }
                                        }
                                        if open_sql() == Some(index) {
                                            tr { class: "sql-row",
                                                td { colspan: "4",
                                                    pre { class: "history-sql", "{entry.sql}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            AccountHistory {}
        }
    }
}

#[component]
fn AccountHistory() -> Element {
    let auth = use_auth();

    let saved = use_resource(move || async move {
        let result = auth.peek().client().search_history().await;
        if let Err(e) = &result {
            if !expire_session(auth, e) {
                tracing::error!("Failed to load account history: {}", e);
            }
        }
        result
    });

    let body = match &*saved.read() {
        None => rsx! {
            div { class: "inline-loading", Spinner { size: 20 } }
        },
        Some(Err(e)) => rsx! {
            p { class: "muted", "Could not load saved searches: {e}" }
        },
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "muted", "No searches saved yet." }
        },
        Some(Ok(items)) => rsx! {
            div { class: "table-scroll",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Query" }
                            th { "Results" }
                        }
                    }
                    tbody {
                        for item in items.iter() {
                            tr { key: "{item.id}",
                                td { {format_timestamp(&item.created_at)} }
                                td { class: "wrap", "{item.query}" }
                                td { class: "numeric", "{item.result_count}" }
                            }
                        }
                    }
                }
            }
        },
    };

    let count = saved
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .map(|items| items.len());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Saved on your account" }
                CardDescription { "Searches the server recorded for you on any device" }
            }
            CardContent { {body} }
            if let Some(count) = count {
                CardFooter {
                    span { class: "muted", {saved_label(count)} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format_shape() {
        let ts = Utc.with_ymd_and_hms(2025, 4, 25, 12, 30, 0).unwrap();
        let text = format_timestamp(&ts);
        // Local timezone shifts the hour but never the shape
        assert!(text.starts_with("Apr 2"), "{text}");
        assert!(text.contains(", 2025 "), "{text}");
        assert_eq!(text.len(), "Apr 25, 2025 12:30".len());
    }

    #[test]
    fn test_saved_label() {
        assert_eq!(saved_label(0), "0 searches saved to your account");
        assert_eq!(saved_label(1), "1 search saved to your account");
        assert_eq!(saved_label(12), "12 searches saved to your account");
    }
}
