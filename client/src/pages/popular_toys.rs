//! Top-rated toys with catalog statistics (`/popular-toys`).

use leptos::prelude::*;

use crate::components::catalog::use_catalog_fetch;
use crate::components::toy_card::ToyCard;
use crate::state::catalog::{CatalogStats, POPULAR_LIMIT, popular_toys};

#[component]
pub fn PopularToysPage() -> impl IntoView {
    let load = use_catalog_fetch();

    move || {
        let load = load.get();
        if load.is_loading() {
            return view! { <div class="route-pending"><span class="loading loading-spinner"></span></div> }.into_any();
        }
        let items = load.items();
        let stats = CatalogStats::from_items(items);
        let ranked = popular_toys(items, POPULAR_LIMIT).into_iter().cloned().collect::<Vec<_>>();
        view! {
            <div class="popular">
                <div class="popular__header">
                    <h1>"🌟 Popular Toys"</h1>
                    <p>
                        "Discover our most loved and highly-rated toys that kids absolutely adore! "
                        "These are the toys that have received the highest ratings from our customers."
                    </p>
                </div>
                <div class="stats">
                    <Stat title="Total Toys" value=stats.total.to_string() desc="Amazing collection" />
                    <Stat title="Average Rating" value=stats.average_label() desc="Out of 5 stars" />
                    <Stat title="Categories" value=stats.categories.to_string() desc="Different types" />
                </div>
                <div class="toy-grid">
                    {ranked
                        .into_iter()
                        .enumerate()
                        .map(|(index, toy)| view! { <ToyCard toy rank={index + 1} /> })
                        .collect_view()}
                </div>
                <div class="popular__footer">
                    <a class="btn btn-outline" href="/">"View All Toys"</a>
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn Stat(title: &'static str, value: String, desc: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat__title">{title}</div>
            <div class="stat__value">{value}</div>
            <div class="stat__desc">{desc}</div>
        </div>
    }
}
