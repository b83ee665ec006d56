//! Page layouts wrapping the routed outlet.
//!
//! ARCHITECTURE
//! ============
//! `HomeLayout` adds the catalog side list next to the outlet for the home and
//! detail routes; `MainLayout` is the plain navbar + outlet shell used by every
//! other route.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::navbar::Navbar;
use super::side_links::SideLinks;

#[component]
pub fn HomeLayout() -> impl IntoView {
    view! {
        <div class="layout layout--home">
            <header class="layout__header">
                <Navbar />
            </header>
            <main class="layout__main layout__main--split">
                <aside class="layout__aside">
                    <SideLinks />
                </aside>
                <section class="layout__content">
                    <Outlet />
                </section>
            </main>
            <Footer />
        </div>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <header class="layout__header">
                <Navbar />
            </header>
            <main class="layout__main">
                <Outlet />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© ToyTopia. Toys for every kind of play."</p>
        </footer>
    }
}
