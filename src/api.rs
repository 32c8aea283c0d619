//! Catalog API
//!
//! Single GET for the whole product list. On wasm32 reqwest runs on the
//! browser's fetch.

use crate::error::{AppError, Result};
use crate::models::Product;

pub async fn fetch_products(url: &str) -> Result<Vec<Product>> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    parse_products(&body)
}

pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products() {
        let body = r#"[
            {"id": 1, "title": "Backpack", "price": 109.95, "category": "men's clothing",
             "description": "Fits 15 inch laptops", "image": "https://example.test/1.jpg",
             "rating": {"rate": 3.9, "count": 120}},
            {"id": 5, "title": "Bracelet", "price": 695, "category": "jewelery"}
        ]"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, 5);
        assert_eq!(products[1].price, 695.0);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_products(r#"{"message": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
