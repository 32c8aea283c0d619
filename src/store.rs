//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::derive::CategoryFilter;
use crate::models::Product;
use crate::state::CatalogState;

/// Progress of the one-off product fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Products from the catalog API, never mutated locally
    pub products: Vec<Product>,
    pub load_status: LoadStatus,
    /// Selected filter bar category
    pub category: CategoryFilter,
    /// Persisted marks, cart and history
    pub catalog: CatalogState,
}

impl AppState {
    pub fn new(catalog: CatalogState) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Products arrived
pub fn store_set_products(store: &AppStore, products: Vec<Product>) {
    store.products().set(products);
    store.load_status().set(LoadStatus::Ready);
}

/// Fetch failed; the product list stays empty
pub fn store_set_failed(store: &AppStore, message: String) {
    store.load_status().set(LoadStatus::Failed(message));
}

/// Replace the persisted state, e.g. after another tab wrote to storage
pub fn store_replace_catalog(store: &AppStore, catalog: CatalogState) {
    store.catalog().set(catalog);
}
