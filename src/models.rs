//! Frontend Models
//!
//! Product records from the catalog API and the small client-side records
//! kept in local storage.

use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Product record (matches the catalog API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Like/dislike marker stored per product id. An unmarked product has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Like,
    Dislike,
    /// Only reachable when preferences are configured as independent
    Both,
}

impl Mark {
    pub fn liked(self) -> bool {
        matches!(self, Mark::Like | Mark::Both)
    }

    pub fn disliked(self) -> bool {
        matches!(self, Mark::Dislike | Mark::Both)
    }

    /// Build a mark from its two flags; `None` means unset
    pub fn from_flags(liked: bool, disliked: bool) -> Option<Mark> {
        match (liked, disliked) {
            (true, true) => Some(Mark::Both),
            (true, false) => Some(Mark::Like),
            (false, true) => Some(Mark::Dislike),
            (false, false) => None,
        }
    }
}

/// One product-detail view. `ts` is epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: ProductId,
    pub ts: i64,
}
