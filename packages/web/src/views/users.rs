//! Admin user management: list, filter, add and remove accounts.

use api::models::CreateUserRequest;
use api::{ClientError, UserInfo};
use dioxus::prelude::*;
use store::Role;
use ui::browser::confirm;
use ui::components::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Dialog, Input, Label, Spinner, ToastOptions,
};
use ui::icons::{FaMagnifyingGlass, FaTrash, FaUserCheck, FaUserPlus, FaUserXmark};
use ui::{expire_session, use_auth, Icon};

fn last_login_text(user: &UserInfo) -> String {
    user.last_login_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string())
}

fn role_badge(role: Role) -> BadgeVariant {
    if role.is_admin() {
        BadgeVariant::Accent
    } else {
        BadgeVariant::Neutral
    }
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 user found".to_string(),
        n => format!("{n} users found"),
    }
}

#[component]
pub fn Users() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut term = use_signal(String::new);
    let mut show_add = use_signal(|| false);

    let mut users = use_resource(move || async move {
        let client = auth.peek().client();
        let result = client.users().await;
        if let Err(e) = &result {
            if !expire_session(auth, e) {
                tracing::error!("Failed to load users: {}", e);
            }
        }
        result
    });

    let current_id = auth().user.map(|u| u.id).unwrap_or_default();

    let on_delete = move |user: UserInfo| async move {
        let prompt = format!("Delete {}? This cannot be undone.", user.email);
        if !confirm(&prompt).await {
            return;
        }
        match auth.peek().client().delete_user(&user.id).await {
            Ok(()) => {
                toast.success(format!("User {} deleted", user.email), ToastOptions::new());
                users.restart();
            }
            Err(e) => {
                if !expire_session(auth, &e) {
                    tracing::error!("Failed to delete user: {}", e);
                    toast.error(format!("Could not delete user: {e}"), ToastOptions::new());
                }
            }
        }
    };

    let body = match &*users.read() {
        None => rsx! {
            div { class: "page-loading", Spinner { size: 24 } }
        },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                h3 { "Could not load users" }
                p { "{e}" }
            }
        },
        Some(Ok(all)) => {
            let matching: Vec<UserInfo> = all.iter().filter(|u| u.matches(&term())).cloned().collect();
            rsx! {
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "System Users" }
                            CardDescription { {count_label(matching.len())} }
                        }
                        div { class: "search-box",
                            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                            Input {
                                placeholder: "Search users...",
                                value: term(),
                                oninput: move |e: FormEvent| term.set(e.value()),
                            }
                        }
                    }
                }
                CardContent {
                    div { class: "table-scroll",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Status" }
                                    th { "Last Login" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                if matching.is_empty() {
                                    tr {
                                        td { colspan: "6", class: "empty-cell", "No users found" }
                                    }
                                }
                                for user in matching {
                                    tr { key: "{user.id}",
                                        td { class: "strong", "{user.display_name()}" }
                                        td { "{user.email}" }
                                        td {
                                            Badge { variant: role_badge(user.role), "{user.role}" }
                                        }
                                        td {
                                            if user.is_active {
                                                span { class: "status active",
                                                    Icon { icon: FaUserCheck, width: 14, height: 14 }
                                                    "Active"
                                                }
                                            } else {
                                                span { class: "status inactive",
                                                    Icon { icon: FaUserXmark, width: 14, height: 14 }
                                                    "Inactive"
                                                }
                                            }
                                        }
                                        td { class: "muted", {last_login_text(&user)} }
                                        td {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                small: true,
                                                aria_label: "Delete user",
                                                disabled: user.id == current_id,
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| on_delete(user.clone())
                                                },
                                                Icon { icon: FaTrash, width: 14, height: 14 }
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
    };

    rsx! {
        div { class: "page",
            div { class: "page-header with-actions",
                div {
                    h1 { "User Management" }
                    p { "Manage system users and their permissions" }
                }
                Button { onclick: move |_| show_add.set(true),
                    Icon { icon: FaUserPlus, width: 14, height: 14 }
                    "Add New User"
                }
            }

            Card { {body} }

            if show_add() {
                AddUserDialog {
                    on_close: move |_| show_add.set(false),
                    on_created: move |_| {
                        show_add.set(false);
                        users.restart();
                    },
                }
            }
        }
    }
}

#[component]
fn AddUserDialog(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if let Err(message) = api::models::validate_credentials(&email(), &password()) {
            toast.error(message, ToastOptions::new());
            return;
        }
        let name = full_name().trim().to_string();
        let request = CreateUserRequest {
            email: email().trim().to_string(),
            password: password(),
            full_name: (!name.is_empty()).then_some(name),
            role: role(),
        };

        saving.set(true);
        let result: Result<UserInfo, ClientError> = auth.peek().client().create_user(&request).await;
        saving.set(false);
        match result {
            Ok(user) => {
                toast.success(format!("User {} created", user.email), ToastOptions::new());
                on_created.call(());
            }
            Err(e) => {
                if !expire_session(auth, &e) {
                    tracing::error!("Failed to create user: {}", e);
                    toast.error(format!("Could not create user: {e}"), ToastOptions::new());
                }
            }
        }
    };

    rsx! {
        Dialog { title: "Add New User", on_close,
            form { onsubmit: on_submit,
                div { class: "field",
                    Label { html_for: "new-email", "Email" }
                    Input {
                        id: "new-email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "new-name", "Full name" }
                    Input {
                        id: "new-name",
                        value: full_name(),
                        oninput: move |e: FormEvent| full_name.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "new-password", "Password" }
                    Input {
                        id: "new-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "new-role", "Role" }
                    select {
                        id: "new-role",
                        class: "input",
                        value: role().as_str(),
                        onchange: move |e: FormEvent| role.set(Role::parse(&e.value()).unwrap_or_default()),
                        option { value: "user", "User" }
                        option { value: "admin", "Admin" }
                    }
                }
                div { class: "dialog-actions",
                    Button {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: saving(),
                        if saving() { "Creating..." } else { "Create User" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(last_login: Option<chrono::DateTime<Utc>>) -> UserInfo {
        UserInfo {
            id: "a1".to_string(),
            email: "ops@example.com".to_string(),
            full_name: None,
            role: Role::User,
            is_active: true,
            last_login_at: last_login,
            created_at: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_last_login_text() {
        assert_eq!(last_login_text(&user(None)), "Never");
        let seen = Utc.with_ymd_and_hms(2025, 4, 25, 9, 23, 0).unwrap();
        assert_eq!(last_login_text(&user(Some(seen))), "2025-04-25 09:23");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 users found");
        assert_eq!(count_label(1), "1 user found");
        assert_eq!(count_label(12), "12 users found");
    }
}
