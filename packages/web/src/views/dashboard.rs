use dioxus::prelude::*;
use store::{HistoryEntry, QueryHistory, ResultRow};
use ui::components::{use_toast, ToastOptions};
use ui::{expire_session, make_store, use_auth, QueryInput, ResultsDisplay, SqlDisplay};

/// Natural-language search over the flight database.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut processing = use_signal(|| false);
    let mut sql = use_signal(String::new);
    let mut explanation = use_signal(String::new);
    let mut rows = use_signal(Vec::<ResultRow>::new);

    let on_submit = move |query: String| {
        spawn(async move {
            processing.set(true);
            let client = auth.peek().client();
            match client.search(&query).await {
                Ok(response) => {
                    let count = response.results.len();
                    QueryHistory::new(make_store()).record(HistoryEntry::now(
                        query,
                        response.sql_query.clone(),
                        count,
                    ));
                    sql.set(response.sql_query);
                    explanation.set(response.explanation);
                    rows.set(response.results);
                    toast.success(
                        format!("Query processed: found {count} results"),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    if !expire_session(auth, &e) {
                        tracing::error!("Query processing error: {}", e);
                        toast.error(
                            format!("Query processing failed: {e}"),
                            ToastOptions::new(),
                        );
                    }
                }
            }
            processing.set(false);
        });
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { "Sky Scribe Assistant" }
                p { "Ask questions about airports, flights, routes and more in natural language." }
            }

            section { class: "panel",
                h2 { "What would you like to know?" }
                QueryInput {
                    on_submit,
                    processing: processing(),
                    placeholder: "Example: Show me flights leaving New York tomorrow evening",
                }

                if processing() {
                    div { class: "processing",
                        span { class: "dot" }
                        span { class: "dot" }
                        span { class: "dot" }
                        span { "Processing your query..." }
                    }
                } else if !sql().is_empty() {
                    SqlDisplay { sql: sql() }
                    if !explanation().is_empty() {
                        p { class: "explanation", "{explanation}" }
                    }
                }
            }

            ResultsDisplay { rows: rows(), loading: processing() }
        }
    }
}
