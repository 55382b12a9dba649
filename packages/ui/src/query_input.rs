use dioxus::prelude::*;

use crate::components::{Button, Textarea};
use crate::icons::FaPaperPlane;
use crate::Icon;

const DEFAULT_PLACEHOLDER: &str = "Ask a question about airport or flight data...";

/// Submit is allowed for non-blank input while no request is running.
pub fn can_submit(input: &str, processing: bool) -> bool {
    !processing && !input.trim().is_empty()
}

/// Multi-line question box. Submits the trimmed text and clears itself.
#[component]
pub fn QueryInput(
    on_submit: EventHandler<String>,
    processing: bool,
    #[props(into)] placeholder: Option<String>,
) -> Element {
    let mut value = use_signal(String::new);
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    rsx! {
        form {
            class: "query-input",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let text = value();
                if can_submit(&text, processing) {
                    on_submit.call(text.trim().to_string());
                    value.set(String::new());
                }
            },
            Textarea {
                value: value(),
                placeholder: "{placeholder}",
                rows: "4",
                disabled: processing,
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            div { class: "query-submit",
                Button {
                    r#type: "submit",
                    small: true,
                    aria_label: "Submit query",
                    disabled: !can_submit(&value(), processing),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_cannot_submit() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   \n\t", false));
    }

    #[test]
    fn test_processing_blocks_submit() {
        assert!(can_submit("airports in USA", false));
        assert!(!can_submit("airports in USA", true));
    }
}
