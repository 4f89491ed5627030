//! # Cart Error Types
//!
//! Typed error handling for the quickcart engine.
//! Fallible cart operations return `Result<T, CartError>`.

use thiserror::Error;

/// Core error type for cart operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Add-item payload rejected at construction
    #[error("Invalid payload: {field} {reason}")]
    InvalidPayload { field: &'static str, reason: String },

    /// Product listing could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Product not found in the listing
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CartError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CartError::InvalidPayload {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if the caller supplied a malformed add-item payload
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, CartError::InvalidPayload { .. })
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::Catalog(err.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
