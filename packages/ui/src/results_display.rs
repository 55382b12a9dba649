use dioxus::prelude::*;
use store::export::{cell_text, export_filename, result_headers, rows_to_csv};
use store::ResultRow;

use crate::browser::{download, today, CSV_MIME};
use crate::components::{use_toast, Button, ButtonVariant, Card, Skeleton, ToastOptions};
use crate::icons::FaDownload;
use crate::Icon;

/// Result table with CSV export. Renders nothing for an empty result.
#[component]
pub fn ResultsDisplay(rows: Vec<ResultRow>, loading: bool) -> Element {
    let toast = use_toast();

    if loading {
        return rsx! {
            Card { class: "results-loading",
                Skeleton { width: "25%" }
                Skeleton {}
                Skeleton {}
                Skeleton { width: "75%" }
            }
        };
    }
    if rows.is_empty() {
        return rsx! {};
    }

    let headers = result_headers(&rows);
    let export_rows = rows.clone();
    let on_export = move |_| match rows_to_csv(&export_rows) {
        Ok(csv) => download(&export_filename("sky-scribe-results", today()), CSV_MIME, &csv),
        Err(e) => {
            tracing::error!("CSV export failed: {e}");
            toast.error("Could not export results".to_string(), ToastOptions::new());
        }
    };

    rsx! {
        Card { class: "results",
            div { class: "results-header",
                h3 { "Query Results" }
                Button {
                    variant: ButtonVariant::Outline,
                    small: true,
                    onclick: on_export,
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    span { class: "hide-mobile", "Export CSV" }
                }
            }
            div { class: "table-scroll",
                table { class: "table",
                    thead {
                        tr {
                            for header in headers.iter() {
                                th { key: "{header}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (index, row) in rows.iter().enumerate() {
                            tr { key: "{index}",
                                for header in headers.iter() {
                                    td { {cell_text(row.get(header))} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
