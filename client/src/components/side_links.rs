//! Side list of every toy in the catalog, linking to its detail route.

use leptos::prelude::*;

use super::catalog::use_catalog_fetch;
use super::toy_card::detail_href;

#[component]
pub fn SideLinks() -> impl IntoView {
    let load = use_catalog_fetch();
    view! {
        <div class="side-links">
            {move || {
                let load = load.get();
                if load.is_loading() {
                    return view! { <span>"Loading..."</span> }.into_any();
                }
                let items = load.items();
                view! {
                    <h1>{format!("All pet ({})", items.len())}</h1>
                    <div class="side-links__list">
                        {items
                            .iter()
                            .map(|toy| view! { <a class="btn side-links__item" href=detail_href(toy.toy_id)>{toy.toy_name.clone()}</a> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
