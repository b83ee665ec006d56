//! Blocking user notices.
//!
//! Success and failure of account actions are announced with the browser's
//! alert dialog; SSR and tests only log the message.

pub fn notify(message: &str) {
    log::info!("notice: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
