//! Category Filter Component
//!
//! One button per category, plus "All".

use leptos::prelude::*;

use crate::derive::{categories, CategoryFilter, ALL_CATEGORIES};
use crate::format::title_case;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryFilterBar() -> impl IntoView {
    let store = use_app_store();
    let labels = Memo::new(move |_| store.products().with(|products| categories(products)));

    view! {
        <nav class="category-filter">
            <For
                each=move || labels.get()
                key=|label| label.clone()
                children=move |label| {
                    let filter = CategoryFilter::from_label(&label);
                    let selected = filter.clone();
                    let is_active = move || store.category().with(|current| *current == filter);
                    let text = if label == ALL_CATEGORIES { label.clone() } else { title_case(&label) };

                    view! {
                        <button
                            class=move || if is_active() { "btn btn-category active" } else { "btn btn-category" }
                            on:click=move |_| store.category().set(selected.clone())
                        >
                            {text}
                        </button>
                    }
                }
            />
        </nav>
    }
}
