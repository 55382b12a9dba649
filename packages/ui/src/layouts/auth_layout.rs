use dioxus::prelude::*;

use crate::icons::FaPlane;
use crate::Icon;

#[component]
pub fn AuthLayout(title: String, children: Element) -> Element {
    rsx! {
        div { class: "auth-layout",
            div { class: "auth-column",
                div { class: "auth-brand",
                    div { class: "auth-mark",
                        Icon { icon: FaPlane, width: 32, height: 32 }
                    }
                    h1 { "{title}" }
                    div { class: "auth-rule" }
                }
                div { class: "auth-card", {children} }
                p { class: "auth-tagline", "Sky Scribe - Your Intelligent Airport Database Assistant" }
            }
        }
    }
}
