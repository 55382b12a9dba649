use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        span { class: "spinner",
            Icon { icon: FaSpinner, width: size, height: size }
        }
    }
}

/// Grey placeholder bar shown while content loads.
#[component]
pub fn Skeleton(#[props(default = "100%".to_string())] width: String) -> Element {
    rsx! {
        div { class: "skeleton", style: "width: {width}" }
    }
}
