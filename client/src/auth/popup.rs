//! Google sign-in popup.
//!
//! FLOW
//! ====
//! 1. The opener issues a ticket and opens Google's OAuth endpoint
//!    (`response_type=id_token`) in a named popup window.
//! 2. Google redirects the popup to `/auth/popup-callback`, which copies its
//!    URL fragment into `localStorage` and closes itself.
//! 3. The opener polls for that fragment, for the popup being closed, and for
//!    its ticket being superseded by a newer sign-in request.
//!
//! A `None` from `window.open` means the browser blocked the popup.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const CALLBACK_PATH: &str = "/auth/popup-callback";
/// `localStorage` key the callback page writes its fragment to.
pub const RESULT_STORAGE_KEY: &str = "toytopia.auth.popup-result";
pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u64 = 250;
#[cfg(feature = "hydrate")]
const POPUP_NAME: &str = "toytopia-google-signin";
#[cfg(feature = "hydrate")]
const POPUP_FEATURES: &str = "popup=yes,width=500,height=620";

/// Google authorization URL for an implicit-flow ID token.
pub fn authorize_url(client_id: &str, redirect_uri: &str, nonce: &str) -> String {
    format!(
        "{GOOGLE_AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=id_token&scope={}&nonce={}&prompt=select_account",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("openid email profile"),
        urlencoding::encode(nonce),
    )
}

/// What the callback page received from Google.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopupResult {
    IdToken(String),
    /// OAuth error code, e.g. `access_denied`.
    Denied(String),
}

/// Parse the callback URL fragment (`#id_token=...&...` or `#error=...`).
pub fn parse_callback_fragment(fragment: &str) -> Option<PopupResult> {
    let fragment = fragment.trim_start_matches('#');
    let mut error = None;
    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        match key {
            "id_token" if !value.is_empty() => return Some(PopupResult::IdToken(value)),
            "error" => error = Some(value),
            _ => {}
        }
    }
    error.map(PopupResult::Denied)
}

/// Monotonic popup request tickets. Issuing a new ticket supersedes the old one.
#[derive(Clone, Debug, Default)]
pub struct PopupTickets {
    latest: Arc<AtomicU64>,
}

impl PopupTickets {
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Acquire) == ticket
    }
}

/// Run the popup flow and return Google's ID token.
///
/// # Errors
///
/// `PopupBlocked`, `PopupClosedByUser`, `PopupCancelled`, or `Other`.
#[cfg(feature = "hydrate")]
pub async fn request_google_id_token(
    client_id: &str,
    tickets: &PopupTickets,
) -> Result<String, super::error::AuthError> {
    use super::error::AuthError;
    use crate::util::storage;

    let window = web_sys::window().ok_or_else(|| AuthError::transport("no browser window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| AuthError::transport("window origin unavailable"))?;
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    let url = authorize_url(client_id, &format!("{origin}{CALLBACK_PATH}"), &nonce);

    storage::remove(RESULT_STORAGE_KEY);
    let ticket = tickets.issue();
    let popup = match window.open_with_url_and_target_and_features(&url, POPUP_NAME, POPUP_FEATURES) {
        Ok(Some(popup)) => popup,
        Ok(None) | Err(_) => return Err(AuthError::from_code("auth/popup-blocked")),
    };

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
        if !tickets.is_current(ticket) {
            return Err(AuthError::from_code("auth/cancelled-popup-request"));
        }
        if let Some(raw) = storage::load_raw(RESULT_STORAGE_KEY) {
            storage::remove(RESULT_STORAGE_KEY);
            let _ = popup.close();
            return match parse_callback_fragment(&raw) {
                Some(PopupResult::IdToken(token)) => Ok(token),
                Some(PopupResult::Denied(code)) if code == "access_denied" => {
                    Err(AuthError::from_code("auth/popup-closed-by-user"))
                }
                Some(PopupResult::Denied(code)) => Err(AuthError::transport(format!("google oauth error: {code}"))),
                None => Err(AuthError::transport("popup returned without an id token")),
            };
        }
        if popup.closed().unwrap_or(true) {
            return Err(AuthError::from_code("auth/popup-closed-by-user"));
        }
    }
}
