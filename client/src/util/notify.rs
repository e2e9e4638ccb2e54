//! Blocking user notifications.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Show a blocking `window.alert`. No-op outside the browser.
pub fn alert(message: &str) {
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
