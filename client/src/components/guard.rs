//! Route guard for pages that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps guarded route views. The decision is re-derived whenever the session
//! or the location changes, so signing out on a guarded page bounces the user
//! to the login page with the page as the return target.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::context::use_auth;
use crate::state::session::{GuardDecision, guard};

/// Path plus query of the current location, as the login page should return to it.
fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = requested_path(&location.pathname.get(), &location.search.get());
        guard(&auth.status(), &requested)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::info!("guard: redirecting anonymous visitor to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=|| view! { <div class="route-pending"><span class="loading loading-spinner"></span></div> }
        >
            {children()}
        </Show>
    }
}
