//! App Configuration
//!
//! Defaults can be overridden by a JSON block in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "history_limit": 50, "preference_mode": "independent" }
//! </script>
//! ```
//!
//! Every field is optional. A missing or malformed block yields the defaults.

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_HISTORY_LIMIT: usize = 200;

/// How like and dislike interact on the same product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceMode {
    /// Setting one marker clears the other
    #[default]
    Exclusive,
    /// Like and dislike toggle independently
    Independent,
}

/// localStorage keys for the three persisted slices
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub marks: String,
    pub cart: String,
    pub history: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            marks: "likedStatus".to_string(),
            cart: "cartIds".to_string(),
            history: "browseHistory".to_string(),
        }
    }
}

/// Rules the state transitions consult
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub history_limit: usize,
    pub preference_mode: PreferenceMode,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            preference_mode: PreferenceMode::Exclusive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub storage_keys: StorageKeys,
    pub history_limit: usize,
    pub preference_mode: PreferenceMode,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_keys: StorageKeys::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            preference_mode: PreferenceMode::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config block from the page, falling back to defaults
    pub fn load() -> Self {
        match read_config_element() {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed app config: {}", e);
            Self::default()
        })
    }

    pub fn rules(&self) -> Rules {
        Rules {
            history_limit: self.history_limit,
            preference_mode: self.preference_mode,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}
