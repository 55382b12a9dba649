//! Browser side effects: file downloads, the clipboard and timers.
//!
//! Event handlers only ever run in the browser; the native fallbacks exist so
//! the crate builds for server-side rendering.

use std::time::Duration;

use dioxus::prelude::*;

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Today's date in the visitor's timezone, for export file names.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Offer `content` as a file download.
pub fn download(filename: &str, mime: &str, content: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = trigger_download(filename, mime, content) {
            tracing::error!("Download of {filename} failed: {e:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (mime, content);
        tracing::warn!("Download of {filename} requested outside the browser");
    }
}

#[cfg(target_arch = "wasm32")]
fn trigger_download(filename: &str, mime: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("no body")?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)
}

pub fn copy_to_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(literal) => {
            document::eval(&format!("navigator.clipboard.writeText({literal});"));
        }
        Err(e) => tracing::error!("Could not copy to clipboard: {e}"),
    }
}

/// Ask the visitor to confirm a destructive action.
pub async fn confirm(message: &str) -> bool {
    let Ok(literal) = serde_json::to_string(message) else {
        return false;
    };
    let mut eval = document::eval(&format!("dioxus.send(window.confirm({literal}));"));
    eval.recv::<bool>().await.unwrap_or(false)
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    let _ = duration;
}
