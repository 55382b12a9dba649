//! Admin database panel.
//!
//! "Manage Data" turns a plain-English command into SQL, shows it, and only
//! runs it once the admin presses Execute. "Database Tables" lists row counts
//! and imports airports or flights from CSV.

use api::models::{TableInfo, UploadKind};
use dioxus::prelude::*;
use ui::components::{
    use_toast, Button, ButtonVariant, Card, Dialog, Label, Spinner, Textarea, ToastOptions,
};
use ui::icons::{FaArrowsRotate, FaDatabase, FaUpload};
use ui::{expire_session, use_auth, Icon, QueryInput, SqlDisplay};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Manage,
    Tables,
}

/// `5893` → `5,893`
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

#[component]
pub fn Database() -> Element {
    let mut tab = use_signal(|| Tab::Manage);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { "Database Management" }
                p { "Manage airport data using natural language commands" }
            }

            div { class: "tabs", role: "tablist",
                button {
                    class: "tab",
                    role: "tab",
                    "data-active": tab() == Tab::Manage,
                    onclick: move |_| tab.set(Tab::Manage),
                    "Manage Data"
                }
                button {
                    class: "tab",
                    role: "tab",
                    "data-active": tab() == Tab::Tables,
                    onclick: move |_| tab.set(Tab::Tables),
                    "Database Tables"
                }
            }

            {
                match tab() {
                    Tab::Manage => rsx! { ManageData {} },
                    Tab::Tables => rsx! { DatabaseTables {} },
                }
            }
        }
    }
}

#[component]
fn ManageData() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut processing = use_signal(|| false);
    let mut executing = use_signal(|| false);
    let mut generated = use_signal(String::new);

    let on_command = move |command: String| {
        spawn(async move {
            processing.set(true);
            match auth.peek().client().admin_command(&command).await {
                Ok(response) => {
                    generated.set(response.sql_query);
                    toast.success("SQL query generated".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    if !expire_session(auth, &e) {
                        tracing::error!("Error generating query: {}", e);
                        toast.error(
                            "Failed to generate SQL query. Please try again.".to_string(),
                            ToastOptions::new(),
                        );
                    }
                }
            }
            processing.set(false);
        });
    };

    let on_execute = move |_| async move {
        let sql = generated();
        if sql.trim().is_empty() {
            return;
        }
        executing.set(true);
        match auth.peek().client().admin_execute(&sql).await {
            Ok(response) => {
                tracing::info!("Executed admin SQL, {} rows affected", response.rows_affected);
                toast.success(
                    format!("Query executed successfully: {}", response.message),
                    ToastOptions::new(),
                );
                generated.set(String::new());
            }
            Err(e) => {
                if !expire_session(auth, &e) {
                    tracing::error!("Error executing query: {}", e);
                    toast.error(format!("Failed to execute SQL query: {e}"), ToastOptions::new());
                }
            }
        }
        executing.set(false);
    };

    rsx! {
        Card { class: "panel",
            h2 { "Natural Language Database Management" }
            p { class: "muted",
                "Tell the assistant what you want to do in plain English, and it will generate the SQL for you."
            }
            QueryInput {
                on_submit: on_command,
                processing: processing(),
                placeholder: "Example: Add new airport called San Francisco International located in USA",
            }
            if !generated().is_empty() {
                div { class: "generated",
                    SqlDisplay { sql: generated() }
                    div { class: "actions end",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| generated.set(String::new()),
                            "Discard"
                        }
                        Button { disabled: executing(), onclick: on_execute,
                            if executing() { "Executing..." } else { "Execute Query" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DatabaseTables() -> Element {
    let auth = use_auth();
    let mut show_import = use_signal(|| false);

    let mut tables = use_resource(move || async move {
        let result = auth.peek().client().tables().await;
        if let Err(e) = &result {
            if !expire_session(auth, e) {
                tracing::error!("Failed to load tables: {}", e);
            }
        }
        result
    });

    let body = match &*tables.read() {
        None => rsx! {
            div { class: "page-loading", Spinner { size: 24 } }
        },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                h3 { "Could not load tables" }
                p { "{e}" }
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "table-grid",
                for table in list.iter().cloned() {
                    TableCard { key: "{table.name}", table }
                }
            }
        },
    };

    rsx! {
        Card { class: "panel",
            div { class: "panel-header",
                h2 { "Database Tables" }
                div { class: "actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| tables.restart(),
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        "Refresh"
                    }
                    Button { onclick: move |_| show_import.set(true),
                        Icon { icon: FaUpload, width: 14, height: 14 }
                        "Import Data"
                    }
                }
            }
            {body}
        }

        if show_import() {
            ImportDialog {
                on_close: move |_| show_import.set(false),
                on_imported: move |_| {
                    show_import.set(false);
                    tables.restart();
                },
            }
        }
    }
}

#[component]
fn TableCard(table: TableInfo) -> Element {
    rsx! {
        div { class: "table-card",
            div { class: "table-card-icon",
                Icon { icon: FaDatabase, width: 18, height: 18 }
            }
            div {
                h3 { "{table.name}" }
                p { class: "muted", "{group_thousands(table.row_count)} rows" }
            }
        }
    }
}

#[component]
fn ImportDialog(on_close: EventHandler<()>, on_imported: EventHandler<()>) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut kind = use_signal(|| UploadKind::Airports);
    let mut csv = use_signal(String::new);
    let mut uploading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if csv().trim().is_empty() {
            toast.error("Paste CSV data to import".to_string(), ToastOptions::new());
            return;
        }
        uploading.set(true);
        let result = auth.peek().client().upload(kind(), csv()).await;
        uploading.set(false);
        match result {
            Ok(response) => {
                toast.success(response.message, ToastOptions::new());
                on_imported.call(());
            }
            Err(e) => {
                if !expire_session(auth, &e) {
                    tracing::error!("Import failed: {}", e);
                    toast.error(format!("Import failed: {e}"), ToastOptions::new());
                }
            }
        }
    };

    rsx! {
        Dialog { title: "Import Data", on_close,
            form { onsubmit: on_submit,
                div { class: "field",
                    Label { html_for: "import-kind", "Target table" }
                    select {
                        id: "import-kind",
                        class: "input",
                        value: kind().as_str(),
                        onchange: move |e: FormEvent| {
                            if let Some(k) = UploadKind::parse(&e.value()) {
                                kind.set(k);
                            }
                        },
                        for k in UploadKind::ALL {
                            option { value: k.as_str(), "{k.as_str()}" }
                        }
                    }
                }
                p { class: "muted small",
                    "Expected columns: "
                    code { "{kind().expected_columns()}" }
                }
                div { class: "field",
                    Label { html_for: "import-csv", "CSV" }
                    Textarea {
                        id: "import-csv",
                        rows: "8",
                        placeholder: "Paste CSV with a header row",
                        value: csv(),
                        oninput: move |e: FormEvent| csv.set(e.value()),
                    }
                }
                div { class: "dialog-actions",
                    Button {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: uploading(),
                        if uploading() { "Importing..." } else { "Import" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(783), "783");
        assert_eq!(group_thousands(5893), "5,893");
        assert_eq!(group_thousands(203456), "203,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-12500), "-12,500");
    }
}
