//! Frontend Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to fetch products: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch products")]
    Status(u16),

    #[error("Malformed product data: {0}")]
    Decode(String),

    #[error("Local storage is unavailable")]
    StorageUnavailable,

    #[error("Storage write rejected for {key}: {message}")]
    Storage { key: String, message: String },

    #[error("Could not encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
