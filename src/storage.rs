//! Local Storage Persistence
//!
//! Three independently keyed JSON blobs back [`CatalogState`]. They are read
//! once at startup and one blob is rewritten after each state change.

use std::collections::{BTreeMap, HashSet};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StorageKeys;
use crate::error::{AppError, Result};
use crate::models::{HistoryEntry, Mark, ProductId};
use crate::state::{CatalogState, Slice};

/// String key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(AppError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).map_err(|e| AppError::Storage {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read all three slices. Each absent or malformed blob loads as empty.
/// History longer than `history_limit` is cut to the most recent entries.
pub fn load_state(store: &impl KeyValueStore, keys: &StorageKeys, history_limit: usize) -> CatalogState {
    let marks = read_marks(store, &keys.marks);
    let mut cart: Vec<ProductId> = read_json(store, &keys.cart).unwrap_or_default();
    let mut history: Vec<HistoryEntry> = read_json(store, &keys.history).unwrap_or_default();

    let mut seen = HashSet::new();
    cart.retain(|id| seen.insert(*id));
    history.truncate(history_limit);

    CatalogState { marks, cart, history }
}

/// Marks are decoded entry by entry so one bad value does not drop the rest.
/// `null` values (left by older writers for cleared marks) are skipped.
fn read_marks(store: &impl KeyValueStore, key: &str) -> BTreeMap<ProductId, Mark> {
    let raw: BTreeMap<String, serde_json::Value> = read_json(store, key).unwrap_or_default();
    raw.into_iter()
        .filter(|(_, value)| !value.is_null())
        .filter_map(|(id, value)| {
            let parsed = id
                .parse::<ProductId>()
                .ok()
                .zip(serde_json::from_value::<Mark>(value).ok());
            if parsed.is_none() {
                log::warn!("Skipping malformed mark for {} in {}", id, key);
            }
            parsed
        })
        .collect()
}

/// Rewrite one slice. Failures are logged and otherwise ignored.
pub fn persist(store: &impl KeyValueStore, keys: &StorageKeys, state: &CatalogState, slice: Slice) {
    let result = match slice {
        Slice::Marks => write_json(store, &keys.marks, &state.marks),
        Slice::Cart => write_json(store, &keys.cart, &state.cart),
        Slice::History => write_json(store, &keys.history, &state.history),
    };
    if let Err(e) = result {
        log::warn!("Storage error: {}", e);
    }
}

fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding malformed {}: {}", key, e);
            None
        }
    }
}

fn write_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|source| AppError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
