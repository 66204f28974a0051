//! Copy-to-clipboard, exported for page scripts.
//!
//! Share links carry an inline copy button; the page's glue script binds
//! the exported function onto `window` so existing `onclick` handlers keep
//! working. Uses the async Clipboard API; a platform denial is surfaced as
//! an error notification plus a console diagnostic, and is never retried.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::console;

use crate::components::notify::{self, NotificationKind};
use crate::core::error::ClipboardError;
use crate::utils::dom;

/// Copy `text` to the clipboard and notify the outcome.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => notify::notify("Link copied to clipboard!", NotificationKind::Success),
            Err(error) => {
                console::error_1(&format!("Failed to copy text: {error}").into());
                notify::notify("Failed to copy link", NotificationKind::Error);
            }
        }
    });
}

async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|_| ClipboardError::CopyRejected)
}
