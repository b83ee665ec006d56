//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by both layouts. Reads the session from `AuthContext` and owns the
//! logout button, which stays disabled while a logout is in flight.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;

/// Primary navigation links, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [("/", "Home"), ("/popular-toys", "Popular Toys"), ("/about", "About"), ("/more", "More")];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if auth.logout_pending() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::auth::client::LogoutOutcome;
            use crate::auth::error::AuthAction;
            use crate::util::notify::notify;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.logout().await {
                    Ok(LogoutOutcome::SignedOut) => {
                        notify("You have been logged out successfully!");
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Ok(LogoutOutcome::AlreadyInProgress) => {}
                    Err(e) => notify(e.message(AuthAction::Logout)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__start">
                <a class="navbar__brand" href="/">"ToyTopia"</a>
            </div>
            <ul class="navbar__links">{links}</ul>
            <div class="navbar__end">
                {move || match auth.user() {
                    Some(user) => {
                        let initial = user.initial().to_string();
                        let label = user
                            .display_name
                            .clone()
                            .or_else(|| user.email.clone())
                            .unwrap_or_default();
                        view! {
                            <span class="avatar avatar--signed-in">{initial}</span>
                            <span class="navbar__user">{label}</span>
                            <a class="btn btn-ghost" href="/my-profile">"Profile"</a>
                            <button
                                class="btn btn-ghost"
                                class:btn--busy=move || auth.logout_pending()
                                disabled=move || auth.logout_pending()
                                on:click=on_logout.clone()
                            >
                                {move || if auth.logout_pending() { "Logging out..." } else { "Logout" }}
                            </button>
                        }
                            .into_any()
                    }
                    None => view! {
                        <span class="avatar">"👤"</span>
                        <a class="btn btn-primary" href="/auth">"Register"</a>
                        <a class="btn btn-outline" href="/login">"Login"</a>
                    }
                        .into_any(),
                }}
            </div>
        </nav>
    }
}
