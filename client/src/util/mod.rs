pub mod auth;
pub mod dark_mode;
pub mod dates;
pub mod download;
pub mod hours;

/// Blocking user-facing alert for failed mutating actions.
pub(crate) fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
