//! Login page: email and password against `/api/v1/auth/token`.

use dioxus::prelude::*;
use ui::components::{use_toast, Button, Input, Label, ToastOptions};
use ui::{use_auth, AuthLayout};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let info = use_resource(|| async { api::get_app_info().await });
    let show_demo = info
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .is_some_and(|i| i.demo_users);

    // Success flips the auth state; the guest guard then moves on to the dashboard
    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        match ui::login(auth, &email(), &password()).await {
            Ok(_) => {
                toast.success("Login successful".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                toast.error(
                    "Login failed: please check your credentials and try again".to_string(),
                    ToastOptions::new(),
                );
                submitting.set(false);
            }
        }
    };

    rsx! {
        AuthLayout { title: "Welcome Back",
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
                div { class: "form-submit",
                    Button { r#type: "submit", disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
                if show_demo {
                    div { class: "auth-hint",
                        p { "Demo credentials:" }
                        p {
                            strong { "Admin: " }
                            "admin@example.com / admin123"
                        }
                        p {
                            strong { "User: " }
                            "user@example.com / user123"
                        }
                    }
                }
            }
        }
    }
}
