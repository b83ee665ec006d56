//! Home listing: every toy in the catalog as a card grid.

use leptos::prelude::*;

use crate::auth::context::use_auth;
use crate::components::catalog::use_catalog_fetch;
use crate::components::toy_card::ToyCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let load = use_catalog_fetch();

    view! {
        <div class="home">
            {move || {
                let load = load.get();
                if load.is_loading() {
                    return view! { <div class="route-pending"><span class="loading loading-spinner"></span></div> }
                        .into_any();
                }
                let items = load.items().to_vec();
                view! {
                    <div class="home__header">
                        <h1>"Welcome to ToyTopia"</h1>
                        <h2>{format!("All Pet Toys ({})", items.len())}</h2>
                    </div>
                    <Show when=move || auth.status().is_anonymous()>
                        <LoginPrompt />
                    </Show>
                    <div class="toy-grid">
                        {items.into_iter().map(|toy| view! { <ToyCard toy /> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn LoginPrompt() -> impl IntoView {
    view! {
        <div class="alert alert-info">
            <div class="alert__body">
                <h3>"Login Required!"</h3>
                <p>"Please login to view detailed toy information and make purchases."</p>
            </div>
            <div class="alert__actions">
                <a class="btn btn-primary" href="/login">"Login"</a>
                <a class="btn btn-outline" href="/auth">"Register"</a>
            </div>
        </div>
    }
}
