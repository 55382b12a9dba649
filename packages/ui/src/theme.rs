//! Light/dark theme: resolved once after mount, toggled from the sidebar.

use dioxus::prelude::*;
use store::{Theme, ThemeStore};

use crate::icons::{FaMoon, FaSun};
use crate::platform::make_store;
use crate::Icon;

const PREFERS_DARK_JS: &str =
    "dioxus.send(window.matchMedia('(prefers-color-scheme: dark)').matches);";

/// Toggle the `dark` class on the document root.
fn apply_theme(theme: Theme) {
    let js = format!(
        "document.documentElement.classList.toggle('dark', {});",
        theme.is_dark()
    );
    document::eval(&js);
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Resolves the stored choice (or the system preference) and applies it.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(PREFERS_DARK_JS);
            let prefers_dark = eval.recv::<bool>().await.unwrap_or(false);
            let resolved = ThemeStore::new(make_store()).resolve(prefers_dark);
            theme.set(resolved);
            apply_theme(resolved);
        });
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();
    let next = current.toggled();

    rsx! {
        button {
            class: "button icon-button",
            "data-style": "ghost",
            aria_label: "Toggle theme",
            title: "Toggle {next.as_str()} mode",
            onclick: move |_| {
                let next = theme().toggled();
                ThemeStore::new(make_store()).set(next);
                theme.set(next);
                apply_theme(next);
            },
            if current.is_dark() {
                Icon { icon: FaMoon, width: 16, height: 16 }
            } else {
                Icon { icon: FaSun, width: 16, height: 16 }
            }
        }
    }
}
