//! Product Grid Component
//!
//! Renders the derived rows for the current view.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::context::use_app_context;
use crate::derive::derive_rows;
use crate::store::AppStateStoreFields;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let mode = ctx.mode;

    let rows = Memo::new(move |_| {
        store.products().with(|products| {
            store.catalog().with(|state| {
                store.category().with(|filter| derive_rows(products, state, filter, mode))
            })
        })
    });

    Effect::new(move |_| {
        log::debug!("{} rows for {:?}", rows.with(Vec::len), mode);
    });

    view! {
        <Show when=move || rows.with(Vec::is_empty)>
            <p class="empty-message">{mode.empty_message()}</p>
        </Show>

        <div class="products-grid">
            <For
                each=move || rows.get()
                key=|row| row.key.clone()
                children=move |row| view! { <ProductCard row=row /> }
            />
        </div>
    }
}
