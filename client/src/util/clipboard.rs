//! Clipboard export of the rendered verdict.
//!
//! TRADE-OFFS
//! ==========
//! Uses the async Clipboard API only. A denied write is logged to the console
//! and otherwise ignored; there is no `execCommand` fallback.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::state::check::CheckState;

/// Notice shown after a successful copy.
pub const COPIED_NOTICE: &str = "تم نسخ النتيجة!";

/// Copy the summary of the last rendered result, if any.
///
/// Returns `false` without touching the clipboard when nothing has been
/// rendered yet.
pub fn copy_summary(state: &CheckState) -> bool {
    let Some(text) = state.summary() else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => crate::util::notice::show(COPIED_NOTICE),
            Err(e) => log::warn!("clipboard write failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
    true
}

#[cfg(feature = "hydrate")]
async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_owned())?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
