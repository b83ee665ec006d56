//! Toy detail page (`/pets-news/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `RequireAuth` and `PreloadCatalog`, so the catalog is
//! always complete here. The `:id` parameter is matched numerically against
//! `toyId`; an unknown id renders the not-found view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::catalog::Catalog;
use crate::components::form::{FormField, run_simulated_submit};
use crate::components::toy_card::{RatingStars, detail_href};
use crate::net::types::CatalogItem;
use crate::state::catalog::{Detail, RELATED_LIMIT, related_items, resolve_detail};
use crate::state::forms::{Field, FieldErrors, TryNowForm};

#[component]
pub fn ToyDetailPage(catalog: Catalog) -> impl IntoView {
    let params = use_params_map();
    let requested = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    move || {
        let requested = requested.get();
        match resolve_detail(Some(catalog.as_slice()), &requested) {
            Detail::Found(toy) => {
                let related = related_items(&catalog, toy, RELATED_LIMIT).into_iter().cloned().collect::<Vec<_>>();
                view! {
                    <ToyDetails toy=toy.clone() />
                    <RelatedToys related />
                }
                .into_any()
            }
            Detail::NotFound => {
                log::info!("no toy with id {requested:?}");
                view! {
                    <div class="not-found">
                        <h1>"404"</h1>
                        <p>"We couldn't find that toy. It may have been removed from the catalog."</p>
                        <a class="btn btn-primary" href="/">"Browse all toys"</a>
                    </div>
                }
                .into_any()
            }
            Detail::Loading => view! { <div class="route-pending"><span class="loading loading-spinner"></span></div> }
                .into_any(),
        }
    }
}

#[component]
fn ToyDetails(toy: CatalogItem) -> impl IntoView {
    view! {
        <div class="toy-detail">
            <div class="toy-detail__picture">
                <img src=toy.picture_url.clone() alt=toy.toy_name.clone() />
            </div>
            <div class="toy-detail__info">
                <h1 class="toy-detail__title">{toy.toy_name.clone()}</h1>
                <div class="toy-detail__rating">
                    <RatingStars rating=toy.rating />
                </div>
                <div class="toy-detail__price">{format!("${}", toy.price)}</div>
                <span class="badge">{toy.sub_category.clone()}</span>
                <p class="toy-detail__description">{toy.description.clone()}</p>
                <div class="divider"></div>
                <div class="toy-detail__seller">
                    <h3>"Seller Information"</h3>
                    <p><span class="label-strong">"Seller:"</span>" "{toy.seller_name.clone()}</p>
                    <p><span class="label-strong">"Email:"</span>" "{toy.seller_email.clone()}</p>
                    <p>
                        <span class="label-strong">"Available:"</span>
                        {format!(" {} units", toy.available_quantity)}
                    </p>
                </div>
                <TryNow toy_name=toy.toy_name.clone() />
                <div class="toy-detail__actions">
                    <button class="btn btn-primary" type="button">"Add to Cart"</button>
                    <button class="btn btn-outline" type="button">"Contact Seller"</button>
                </div>
            </div>
        </div>
    }
}

/// Free-trial request form. Submission is simulated.
#[component]
fn TryNow(toy_name: String) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let success = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = TryNowForm { name: name.get_untracked(), email: email.get_untracked() };
        let found = form.validate();
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            run_simulated_submit(submitting, success, move || {
                name.set(String::new());
                email.set(String::new());
            });
        }
    };

    view! {
        <div class="try-now">
            <h3>"Try This Toy Now!"</h3>
            <p>"Want to try this toy before buying? Fill out the form below and we'll arrange a free trial for you!"</p>
            <form class="try-now__form" on:submit=on_submit>
                <FormField
                    label="Your Name"
                    field=Field::Name
                    placeholder="Enter your full name"
                    value=name
                    errors=errors
                />
                <FormField
                    label="Email Address"
                    field=Field::Email
                    input_type="email"
                    placeholder="Enter your email"
                    value=email
                    errors=errors
                />
                <button class="btn btn-accent" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Try Now" }}
                </button>
            </form>
            <Show when=move || success.get()>
                <div class="alert alert-success">
                    <h3>"Success!"</h3>
                    <p>
                        {format!(
                            "Thank you for your interest! We'll contact you soon about your free trial for {toy_name}.",
                        )}
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RelatedToys(related: Vec<CatalogItem>) -> impl IntoView {
    view! {
        <div class="related">
            <h2>"Related Products"</h2>
            <div class="related__grid">
                {related
                    .into_iter()
                    .map(|toy| {
                        view! {
                            <div class="toy-card toy-card--compact">
                                <figure class="toy-card__picture">
                                    <img src=toy.picture_url.clone() alt=toy.toy_name.clone() />
                                </figure>
                                <div class="toy-card__body">
                                    <h3 class="toy-card__title">{toy.toy_name.clone()}</h3>
                                    <p class="toy-card__price">{format!("${}", toy.price)}</p>
                                    <a class="btn btn-outline" href=detail_href(toy.toy_id)>"View More"</a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
