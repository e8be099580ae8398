//! Blocking user notices via `window.alert`.

/// Show `message` to the user. Outside the browser this is a no-op.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
