use dioxus::prelude::*;
use ui::components::Button;
use ui::icons::{FaArrowLeft, FaLocationDot};
use ui::Icon;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            div { class: "not-found-card",
                div { class: "not-found-mark",
                    Icon { icon: FaLocationDot, width: 48, height: 48 }
                }
                h1 { "Page Not Found" }
                p {
                    "This destination doesn't exist in our database. Let's navigate back to a known location."
                }
                Button {
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    "Return to Dashboard"
                }
            }
        }
    }
}
