//! View Derivation
//!
//! Turns the fetched products plus the persisted catalog state into the
//! ordered list of cards to render for the current view.

use std::collections::{BTreeSet, HashMap};

use crate::models::{Product, ProductId};
use crate::state::CatalogState;
use crate::view::ViewMode;

pub const ALL_CATEGORIES: &str = "All";

/// Category filter chosen in the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// How a product card is laid out and which actions it offers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardMode {
    /// Image, title, category, price and a link to the detail page
    Summary,
    /// Summary plus remove-from-cart
    CartLine,
    /// Full detail with like/dislike/cart toggles
    Full,
    /// Summary plus the time it was viewed (epoch ms)
    Visited { at: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Stable key for keyed rendering; history may repeat a product
    pub key: String,
    pub product: Product,
    pub card: CardMode,
}

impl DisplayRow {
    fn new(product: &Product, card: CardMode) -> Self {
        Self {
            key: product.id.to_string(),
            product: product.clone(),
            card,
        }
    }
}

/// Compute the cards for `mode`, narrowed by `filter`
pub fn derive_rows(
    products: &[Product],
    state: &CatalogState,
    filter: &CategoryFilter,
    mode: ViewMode,
) -> Vec<DisplayRow> {
    let rows: Vec<DisplayRow> = match mode {
        ViewMode::Catalog => products
            .iter()
            .map(|p| DisplayRow::new(p, CardMode::Summary))
            .collect(),
        ViewMode::Cart => products
            .iter()
            .filter(|p| state.in_cart(p.id))
            .map(|p| DisplayRow::new(p, CardMode::CartLine))
            .collect(),
        ViewMode::Liked => products
            .iter()
            .filter(|p| state.is_liked(p.id))
            .map(|p| DisplayRow::new(p, CardMode::Summary))
            .collect(),
        ViewMode::Detail(id) => products
            .iter()
            .filter(|p| Some(p.id) == id)
            .map(|p| DisplayRow::new(p, CardMode::Full))
            .collect(),
        ViewMode::History => history_rows(products, state),
    };

    rows.into_iter()
        .filter(|row| filter.matches(&row.product))
        .collect()
}

/// Join the history log against the products, most recent first.
/// Entries whose product is gone are skipped.
fn history_rows(products: &[Product], state: &CatalogState) -> Vec<DisplayRow> {
    let by_id: HashMap<ProductId, &Product> = products.iter().map(|p| (p.id, p)).collect();

    state
        .history
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let product = by_id.get(&entry.id)?;
            Some(DisplayRow {
                key: format!("{}-{}-{}", entry.id, entry.ts, idx),
                product: (*product).clone(),
                card: CardMode::Visited { at: entry.ts },
            })
        })
        .collect()
}

/// Filter bar labels: "All" followed by the distinct categories, sorted
pub fn categories(products: &[Product]) -> Vec<String> {
    let distinct: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
    std::iter::once(ALL_CATEGORIES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

pub fn liked_count(state: &CatalogState) -> usize {
    state.marks.values().filter(|m| m.liked()).count()
}

pub fn cart_count(state: &CatalogState) -> usize {
    state.cart.len()
}
