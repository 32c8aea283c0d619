//! Catalog Browser App
//!
//! Root component: loads persisted state, fetches products once, and renders
//! the page for the view selected in the URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AppHeader, CategoryFilterBar, ProductGrid};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::state::CatalogState;
use crate::storage::{self, LocalStorage};
use crate::store::{store_set_failed, store_set_products, AppState, AppStateStoreFields, LoadStatus};
use crate::view::ViewMode;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let mode = ViewMode::current();
    log::info!("Rendering {:?}", mode);

    let catalog = match LocalStorage::open() {
        Ok(local) => storage::load_state(&local, &config.storage_keys, config.history_limit),
        Err(e) => {
            log::warn!("{}; starting with empty state", e);
            CatalogState::default()
        }
    };

    let store = Store::new(AppState::new(catalog));
    let ctx = AppContext::new(config, mode, store);
    provide_context(store);
    provide_context(ctx);

    // Load products on mount
    Effect::new(move |_| {
        let url = ctx.config.with_value(|c| c.api_url.clone());
        spawn_local(async move {
            match api::fetch_products(&url).await {
                Ok(products) => {
                    log::info!("Loaded {} products", products.len());
                    store_set_products(&store, products);
                }
                Err(e) => {
                    log::error!("Product fetch failed: {}", e);
                    store_set_failed(&store, e.to_string());
                }
            }
        });
    });

    // Views live in separate tabs; pick up writes made by the others
    let _ = window_event_listener(leptos::ev::storage, move |ev| {
        let ours = ctx.config.with_value(|c| {
            let keys = &c.storage_keys;
            match ev.key() {
                Some(key) => key == keys.marks || key == keys.cart || key == keys.history,
                None => true,
            }
        });
        if ours {
            log::debug!("Storage changed in another tab, reloading");
            ctx.reload_from_storage();
        }
    });

    view! {
        <div class="app">
            <AppHeader />
            {move || match store.load_status().get() {
                LoadStatus::Loading => view! { <p>"Loading products..."</p> }.into_any(),
                LoadStatus::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                LoadStatus::Ready => view! {
                    <CategoryFilterBar />
                    <ProductGrid />
                }.into_any(),
            }}
        </div>
    }
}
