//! App Header Component
//!
//! Page title and the links that open the other views in new tabs.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::derive::{cart_count, liked_count};
use crate::state::Action;
use crate::store::AppStateStoreFields;
use crate::view::ViewMode;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let mode = ctx.mode;

    let in_cart = Memo::new(move |_| store.catalog().with(cart_count));
    let liked = Memo::new(move |_| store.catalog().with(liked_count));

    view! {
        <header class="app-header">
            <h1>{mode.title()}</h1>
            <div class="header-actions">
                {mode.shows_cart_link().then(|| view! {
                    <button class="btn btn-open-wishlist" on:click=move |_| ctx.open_view(ViewMode::Cart)>
                        {move || format!("Your Cart ({})", in_cart.get())}
                    </button>
                })}
                {mode.shows_liked_link().then(|| view! {
                    <button class="btn btn-open-wishlist" on:click=move |_| ctx.open_view(ViewMode::Liked)>
                        {move || format!("Liked ({})", liked.get())}
                    </button>
                })}
                {mode.shows_history_link().then(|| view! {
                    <button class="btn btn-open-wishlist" on:click=move |_| ctx.open_view(ViewMode::History)>
                        "Your History"
                    </button>
                })}
                {mode.shows_clear_history().then(|| view! {
                    <button class="btn btn-open-wishlist" on:click=move |_| ctx.dispatch(Action::ClearHistory)>
                        "Clear Browsing History"
                    </button>
                })}
            </div>
        </header>
    }
}
