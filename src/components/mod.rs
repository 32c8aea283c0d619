//! UI Components
//!
//! Leptos components for the catalog pages.

mod header;
mod category_filter;
mod product_card;
mod product_grid;

pub use header::AppHeader;
pub use category_filter::CategoryFilterBar;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
