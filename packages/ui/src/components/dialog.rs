use dioxus::prelude::*;

/// Full-screen overlay with a centered card. Clicking the backdrop calls
/// `on_close`; clicks inside the card do not.
#[component]
pub fn Dialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "dialog-title", "{title}" }
                {children}
            }
        }
    }
}
