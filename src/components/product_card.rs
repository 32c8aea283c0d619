//! Product Card Components
//!
//! Summary cards for list views and the full card for the detail view.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::derive::{CardMode, DisplayRow};
use crate::format::{format_price, format_viewed_at, title_case};
use crate::models::{Mark, Product};
use crate::state::Action;
use crate::store::AppStateStoreFields;

/// Card for one derived row
#[component]
pub fn ProductCard(row: DisplayRow) -> impl IntoView {
    let DisplayRow { product, card, .. } = row;
    match card {
        CardMode::Full => view! { <DetailCard product=product /> }.into_any(),
        CardMode::Summary | CardMode::CartLine | CardMode::Visited { .. } => {
            view! { <SummaryCard product=product card=card /> }.into_any()
        }
    }
}

#[component]
fn CardImage(product: Product) -> impl IntoView {
    product.image.map(|src| {
        view! { <img src=src alt=product.title class="product-image" /> }
    })
}

/// Image, title, category and price with a link to the detail tab
#[component]
fn SummaryCard(product: Product, card: CardMode) -> impl IntoView {
    let ctx = use_app_context();
    let id = product.id;
    let visit_label = match card {
        CardMode::Visited { .. } => "View Details",
        _ => "Visit Product",
    };

    view! {
        <div class="product-card">
            <div class="product-card-header">
                <CardImage product=product.clone() />
            </div>

            <h2 class="product-title">{product.title.clone()}</h2>
            <p class="product-category">{title_case(&product.category)}</p>
            <p class="product-price">{format_price(product.price)}</p>

            {match card {
                CardMode::Visited { at } => Some(view! {
                    <p class="product-rating">{format!("Viewed: {}", format_viewed_at(at))}</p>
                }),
                _ => None,
            }}

            <div class="product-actions">
                <button class="btn btn-details" on:click=move |_| ctx.open_product(id)>
                    {visit_label}
                </button>
                {(card == CardMode::CartLine).then(|| view! {
                    <button class="btn btn-remove" on:click=move |_| ctx.dispatch(Action::RemoveFromCart(id))>
                        "Remove"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Full product information with like/dislike and cart toggles
#[component]
fn DetailCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = product.id;

    let mark = Memo::new(move |_| store.catalog().with(|state| state.mark(id)));
    let in_cart = Memo::new(move |_| store.catalog().with(|state| state.in_cart(id)));
    let liked = move || mark.get().is_some_and(Mark::liked);
    let disliked = move || mark.get().is_some_and(Mark::disliked);

    view! {
        <div class="product-card">
            <div class="product-card-header">
                <CardImage product=product.clone() />
                <Show when=move || in_cart.get()>
                    <span class="wishlist-badge">"In Cart"</span>
                </Show>
            </div>

            <h2 class="product-title">{product.title.clone()}</h2>
            <p class="product-category">{title_case(&product.category)}</p>
            <p class="product-price">{format_price(product.price)}</p>

            {product.rating.map(|rating| view! {
                <p class="product-rating">
                    {format!("Rating: {} ({} reviews)", rating.rate, rating.count)}
                </p>
            })}

            <p class="product-description">{product.description.clone()}</p>

            <div class="product-actions">
                <button
                    class=move || if liked() { "btn btn-like active" } else { "btn btn-like" }
                    on:click=move |_| ctx.dispatch(Action::ToggleLike(id))
                >
                    {move || if liked() { "Liked" } else { "Like" }}
                </button>

                <button
                    class=move || if disliked() { "btn btn-dislike active" } else { "btn btn-dislike" }
                    on:click=move |_| ctx.dispatch(Action::ToggleDislike(id))
                >
                    {move || if disliked() { "Disliked" } else { "Dislike" }}
                </button>

                <button
                    class=move || if in_cart.get() { "btn btn-wishlist active" } else { "btn btn-wishlist" }
                    on:click=move |_| ctx.dispatch(Action::ToggleCart(id))
                >
                    {move || if in_cart.get() { "Remove from Cart" } else { "Add to Cart" }}
                </button>
            </div>
        </div>
    }
}
