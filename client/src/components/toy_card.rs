//! Toy summary card and star rating row.

use leptos::prelude::*;

use crate::net::types::CatalogItem;
use crate::state::catalog::filled_stars;

const MAX_STARS: usize = 5;

#[component]
pub fn RatingStars(rating: f64) -> impl IntoView {
    let filled = filled_stars(rating);
    view! {
        <span class="rating" aria-label=format!("{rating} out of 5")>
            {(0..MAX_STARS)
                .map(|i| {
                    view! { <span class="rating__star" class:rating__star--filled={i < filled}>"★"</span> }
                })
                .collect_view()}
        </span>
        <span class="rating__value">{format!("{rating}/5.0")}</span>
    }
}

/// Detail route for a toy.
pub fn detail_href(toy_id: u64) -> String {
    format!("/pets-news/{toy_id}")
}

#[component]
pub fn ToyCard(toy: CatalogItem, #[prop(optional)] rank: Option<usize>) -> impl IntoView {
    view! {
        <div class="toy-card">
            {rank.map(|rank| view! { <span class="toy-card__rank">{format!("#{rank}")}</span> })}
            <figure class="toy-card__picture">
                <img src=toy.picture_url.clone() alt=toy.toy_name.clone() />
            </figure>
            <div class="toy-card__body">
                <h2 class="toy-card__title">{toy.toy_name.clone()}</h2>
                <div class="toy-card__rating">
                    <RatingStars rating=toy.rating />
                </div>
                <p class="toy-card__price">{format!("${}", toy.price)}</p>
                <span class="badge">{toy.sub_category.clone()}</span>
                <p class="toy-card__description">{toy.description.clone()}</p>
                <div class="toy-card__actions">
                    <a href=detail_href(toy.toy_id) class="btn btn-primary">
                        "View More"
                    </a>
                </div>
            </div>
        </div>
    }
}
