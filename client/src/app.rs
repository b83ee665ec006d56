//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every route; `App` is both rendered
//! there and hydrated in the browser. The auth context is installed here once,
//! above the router, so every route shares one session.
//!
//! ROUTES
//! ======
//! Home layout (navbar + side list): `/`, `/pets-news/:id` (guarded, preloaded).
//! Main layout (navbar): `/auth`, `/login`, `/my-profile` (guarded),
//! `/popular-toys`, `/about`, `/more`. Bare: `/auth/popup-callback`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::auth::context::provide_auth;
use crate::components::catalog::{Catalog, PreloadCatalog};
use crate::components::guard::RequireAuth;
use crate::components::layout::{HomeLayout, MainLayout};
use crate::components::navbar::Navbar;
use crate::pages::about::AboutPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::more::MorePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::popular_toys::PopularToysPage;
use crate::pages::popup_callback::PopupCallbackPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::pages::toy_detail::ToyDetailPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/toytopia.css" />
        <Title text="ToyTopia" />
        <Router>
            <Routes fallback=|| view! { <Navbar /><NotFoundPage /> }>
                <ParentRoute path=path!("") view=HomeLayout>
                    <Route path=path!("") view=HomePage />
                    <Route
                        path=path!("pets-news/:id")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <PreloadCatalog render=|catalog: Catalog| view! { <ToyDetailPage catalog /> } />
                                </RequireAuth>
                            }
                        }
                    />
                </ParentRoute>
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("auth") view=SignupPage />
                    <Route path=path!("login") view=LoginPage />
                    <Route
                        path=path!("my-profile")
                        view=|| view! { <RequireAuth><ProfilePage /></RequireAuth> }
                    />
                    <Route path=path!("popular-toys") view=PopularToysPage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("more") view=MorePage />
                </ParentRoute>
                <Route path=path!("auth/popup-callback") view=PopupCallbackPage />
            </Routes>
        </Router>
    }
}
