//! View Mode
//!
//! Which page this browsing context shows, selected by the `view` and `id`
//! query parameters. Cart, liked, history and product pages each open in a
//! new tab.

use percent_encoding::percent_decode_str;

use crate::models::ProductId;

pub const VIEW_PARAM: &str = "view";
pub const ID_PARAM: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Catalog,
    Cart,
    Liked,
    /// `None` when the `id` parameter is missing or not a number; renders an empty page
    Detail(Option<ProductId>),
    History,
}

impl ViewMode {
    /// Resolve from raw `view` and `id` parameter values
    pub fn from_params(view: Option<&str>, id: Option<&str>) -> Self {
        match view {
            Some("cart") => ViewMode::Cart,
            Some("liked") => ViewMode::Liked,
            Some("history") => ViewMode::History,
            Some("product") | Some("detail") => {
                ViewMode::Detail(id.and_then(|raw| raw.trim().parse().ok()))
            }
            _ => ViewMode::Catalog,
        }
    }

    /// Parse a `location.search` string, with or without the leading `?`.
    /// Split by hand rather than through `UrlSearchParams` so it runs in native tests.
    pub fn from_query(query: &str) -> Self {
        let mut view = None;
        let mut id = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match key {
                VIEW_PARAM if view.is_none() => view = Some(value),
                ID_PARAM if id.is_none() => id = Some(value),
                _ => {}
            }
        }
        Self::from_params(view.as_deref(), id.as_deref())
    }

    /// The mode for the current page. Reads `location.search` and parses it
    /// with `from_query` instead of `UrlSearchParams`.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }

    /// `view` parameter value, `None` for the catalog
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ViewMode::Catalog => None,
            ViewMode::Cart => Some("cart"),
            ViewMode::Liked => Some("liked"),
            ViewMode::Detail(_) => Some("product"),
            ViewMode::History => Some("history"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Catalog => "Product Catalog",
            ViewMode::Cart => "My Cart",
            ViewMode::Liked => "Liked Products",
            ViewMode::Detail(_) => "Product Details",
            ViewMode::History => "Browsing History",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ViewMode::History => "No browsing history yet.",
            _ => "No products to show.",
        }
    }

    pub fn shows_cart_link(&self) -> bool {
        !matches!(self, ViewMode::Cart)
    }

    pub fn shows_liked_link(&self) -> bool {
        !matches!(self, ViewMode::Liked)
    }

    pub fn shows_history_link(&self) -> bool {
        matches!(self, ViewMode::Catalog)
    }

    pub fn shows_clear_history(&self) -> bool {
        matches!(self, ViewMode::History)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Build the URL for `mode` from the current page URL, keeping unrelated params
pub fn href_for(current: &str, mode: ViewMode) -> Option<String> {
    let url = web_sys::Url::new(current).ok()?;
    let params = url.search_params();
    match mode.param() {
        Some(view) => params.set(VIEW_PARAM, view),
        None => params.delete(VIEW_PARAM),
    }
    match mode {
        ViewMode::Detail(Some(id)) => params.set(ID_PARAM, &id.to_string()),
        _ => params.delete(ID_PARAM),
    }
    url.set_search(&String::from(params.to_string()));
    Some(url.href())
}

/// Open `mode` in a new browsing context
pub fn open_in_new_tab(mode: ViewMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(current) = window.location().href() else {
        return;
    };
    let Some(target) = href_for(&current, mode) else {
        log::warn!("Could not build URL for {:?}", mode);
        return;
    };
    log::debug!("Opening {}", target);
    if let Err(e) = window.open_with_url_and_target_and_features(&target, "_blank", "noopener,noreferrer") {
        log::warn!("window.open failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(ViewMode::from_query(""), ViewMode::Catalog);
        assert_eq!(ViewMode::from_query("?view=cart"), ViewMode::Cart);
        assert_eq!(ViewMode::from_query("view=liked"), ViewMode::Liked);
        assert_eq!(ViewMode::from_query("?view=history&id=4"), ViewMode::History);
        assert_eq!(ViewMode::from_query("?view=product&id=5"), ViewMode::Detail(Some(5)));
        assert_eq!(ViewMode::from_query("?id=5&view=detail"), ViewMode::Detail(Some(5)));
    }

    #[test]
    fn test_detail_without_id_stays_on_detail_page() {
        let missing = ViewMode::from_query("?view=product");
        assert_eq!(missing, ViewMode::Detail(None));
        assert_eq!(ViewMode::from_query("?view=product&id=abc"), ViewMode::Detail(None));
        assert_eq!(missing.title(), "Product Details");
        assert!(!missing.shows_history_link());
        assert_eq!(missing.param(), Some("product"));
    }

    #[test]
    fn test_unknown_view_is_catalog() {
        assert_eq!(ViewMode::from_query("?view=checkout"), ViewMode::Catalog);
        assert_eq!(ViewMode::from_query("?utm_source=mail"), ViewMode::Catalog);
    }

    #[test]
    fn test_percent_decoded_values() {
        assert_eq!(ViewMode::from_query("?view=%63art"), ViewMode::Cart);
        assert_eq!(ViewMode::from_query("?view=product&id=%2012"), ViewMode::Detail(Some(12)));
    }

    #[test]
    fn test_header_links() {
        assert!(!ViewMode::Cart.shows_cart_link());
        assert!(ViewMode::Cart.shows_liked_link());
        assert!(!ViewMode::Liked.shows_liked_link());
        assert!(ViewMode::Catalog.shows_history_link());
        assert!(!ViewMode::Detail(Some(1)).shows_history_link());
        assert!(ViewMode::History.shows_clear_history());
        assert!(!ViewMode::Catalog.shows_clear_history());
    }

    #[test]
    fn test_titles() {
        assert_eq!(ViewMode::Detail(Some(3)).title(), "Product Details");
        assert_eq!(ViewMode::History.empty_message(), "No browsing history yet.");
        assert_eq!(ViewMode::Liked.empty_message(), "No products to show.");
    }
}
