//! OAuth popup landing page (`/auth/popup-callback`).
//!
//! Google redirects the sign-in popup here with the result in the URL
//! fragment. The page hands the raw fragment to the opener through
//! `localStorage` and closes itself; the opener does the parsing.

use leptos::prelude::*;

#[component]
pub fn PopupCallbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::auth::popup::RESULT_STORAGE_KEY;
        use crate::util::storage;

        let Some(window) = web_sys::window() else {
            return;
        };
        let fragment = window.location().hash().unwrap_or_default();
        if fragment.is_empty() {
            log::warn!("popup callback reached without a fragment");
        }
        storage::save_raw(RESULT_STORAGE_KEY, &fragment);
        let _ = window.close();
    });

    view! {
        <div class="route-pending">
            <p>"Completing sign-in..."</p>
        </div>
    }
}
