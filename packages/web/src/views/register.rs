use api::models::{validate_credentials, RegisterRequest};
use dioxus::prelude::*;
use store::Role;
use ui::components::{use_toast, Button, Input, Label, ToastOptions};
use ui::{use_auth, AuthLayout};

use crate::Route;

/// Client-side checks before anything is sent.
fn check_registration(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords don't match".to_string());
    }
    validate_credentials(email, password)
}

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut submitting = use_signal(|| false);

    let info = use_resource(|| async { api::get_app_info().await });
    let allow_admin = info
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .is_some_and(|i| i.allow_admin_registration);

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if let Err(message) = check_registration(&email(), &password(), &confirm()) {
            toast.error(message, ToastOptions::new());
            return;
        }

        let name = full_name().trim().to_string();
        let request = RegisterRequest {
            email: email().trim().to_string(),
            password: password(),
            full_name: (!name.is_empty()).then_some(name),
            role: role(),
        };

        submitting.set(true);
        match ui::register(auth, &request).await {
            Ok(_) => {
                toast.success("Account created".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                toast.error(format!("Registration failed: {e}"), ToastOptions::new());
                submitting.set(false);
            }
        }
    };

    rsx! {
        AuthLayout { title: "Create Account",
            form { class: "auth-form", onsubmit: on_submit,
                div { class: "field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "your@email.com",
                        required: true,
                        value: email(),
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "full-name", "Full name (optional)" }
                    Input {
                        id: "full-name",
                        placeholder: "Ada Lovelace",
                        value: full_name(),
                        oninput: move |e: FormEvent| full_name.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "••••••••",
                        required: true,
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "confirm-password", "Confirm Password" }
                    Input {
                        id: "confirm-password",
                        r#type: "password",
                        placeholder: "••••••••",
                        required: true,
                        value: confirm(),
                        oninput: move |e: FormEvent| confirm.set(e.value()),
                    }
                }
                if allow_admin {
                    div { class: "field",
                        span { class: "label", "Account Type" }
                        div { class: "radio-group",
                            label {
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    value: "user",
                                    checked: role() == Role::User,
                                    onchange: move |_| role.set(Role::User),
                                }
                                "User"
                            }
                            label {
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    value: "admin",
                                    checked: role() == Role::Admin,
                                    onchange: move |_| role.set(Role::Admin),
                                }
                                "Admin"
                            }
                        }
                    }
                }
                div { class: "form-submit",
                    Button { r#type: "submit", disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Create Account" }
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_passwords_are_rejected_first() {
        assert_eq!(
            check_registration("not-an-email", "secret1", "secret2"),
            Err("Passwords don't match".to_string())
        );
    }

    #[test]
    fn test_registration_checks() {
        assert!(check_registration("new@example.com", "secret1", "secret1").is_ok());
        assert!(check_registration("new@example.com", "abc", "abc").is_err());
        assert!(check_registration("nobody", "secret1", "secret1").is_err());
    }
}
