//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the one place where
//! catalog state is mutated and written back to storage.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::format::now_ms;
use crate::models::ProductId;
use crate::state::{Action, Slice};
use crate::storage::{self, LocalStorage};
use crate::store::{store_replace_catalog, AppStateStoreFields, AppStore};
use crate::view::{self, ViewMode};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    /// Resolved once from the URL; each view lives in its own tab
    pub mode: ViewMode,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, mode: ViewMode, store: AppStore) -> Self {
        Self {
            config: StoredValue::new(config),
            mode,
            store,
        }
    }

    /// Apply a state transition and persist the slice it touched
    pub fn dispatch(&self, action: Action) {
        let rules = self.config.with_value(AppConfig::rules);
        let mut changed = false;
        self.store.catalog().update(|state| changed = state.apply(action, &rules));
        if changed {
            log::debug!("{:?}", action);
            self.persist(action.slice());
        }
    }

    /// Record the view, then open the product in a new tab
    pub fn open_product(&self, id: ProductId) {
        self.dispatch(Action::RecordView { id, at: now_ms() });
        view::open_in_new_tab(ViewMode::Detail(Some(id)));
    }

    pub fn open_view(&self, mode: ViewMode) {
        view::open_in_new_tab(mode);
    }

    /// Re-read persisted state, e.g. after another tab changed it
    pub fn reload_from_storage(&self) {
        match LocalStorage::open() {
            Ok(local) => {
                let loaded = self.config.with_value(|c| storage::load_state(&local, &c.storage_keys, c.history_limit));
                store_replace_catalog(&self.store, loaded);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    fn persist(&self, slice: Slice) {
        let local = match LocalStorage::open() {
            Ok(local) => local,
            Err(e) => {
                log::warn!("Storage error: {}", e);
                return;
            }
        };
        self.config.with_value(|c| {
            self.store
                .catalog()
                .with_untracked(|state| storage::persist(&local, &c.storage_keys, state, slice));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
