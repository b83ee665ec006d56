//! Catalog loading for route views.
//!
//! DESIGN
//! ======
//! Two conventions share one fetch:
//! - `PreloadCatalog` gates a route: its view is built only once the whole
//!   catalog is in hand, so the page never renders a loading state.
//! - `use_catalog_fetch` starts after mount and exposes a `CatalogLoad`
//!   signal; failures are logged and degrade to an empty catalog.
//!
//! Both run as abortable tasks tied to the owning view, so navigating away
//! before the response arrives drops the result instead of writing into a
//! disposed signal.

use std::sync::Arc;

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;

use crate::net::catalog::{CatalogError, fetch_catalog};
use crate::net::types::CatalogItem;
use crate::state::catalog::CatalogLoad;

/// Shared, immutable catalog handed to preloaded route views.
pub type Catalog = Arc<Vec<CatalogItem>>;

/// Run `fetch_catalog` as a task aborted when the current owner is cleaned up.
fn spawn_scoped_fetch<F>(on_done: F)
where
    F: FnOnce(Result<Vec<CatalogItem>, CatalogError>) + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fetch_catalog(), registration);
    on_cleanup(move || handle.abort());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match task.await {
            Ok(result) => on_done(result),
            Err(_aborted) => log::debug!("catalog fetch aborted; view unmounted"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    drop((task, on_done));
}

/// Post-mount catalog fetch for pages that render their own loading state.
pub fn use_catalog_fetch() -> ReadSignal<CatalogLoad> {
    let load = RwSignal::new(CatalogLoad::Loading);
    spawn_scoped_fetch(move |result| load.set(CatalogLoad::from_result(result)));
    load.read_only()
}

/// Resolve the catalog before building `render`'s view.
#[component]
pub fn PreloadCatalog<F, V>(render: F) -> impl IntoView
where
    F: Fn(Catalog) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let state = RwSignal::new(None::<Result<Catalog, CatalogError>>);
    spawn_scoped_fetch(move |result| state.set(Some(result.map(Arc::new))));

    move || match state.get() {
        None => view! { <div class="route-pending"><span class="loading loading-spinner"></span></div> }.into_any(),
        Some(Ok(catalog)) => render(catalog).into_any(),
        Some(Err(e)) => {
            log::error!("catalog preload failed: {e}");
            view! {
                <div class="route-error">
                    <h2>"Something went wrong"</h2>
                    <p>"The toy catalog could not be loaded. Please try again later."</p>
                </div>
            }
            .into_any()
        }
    }
}
