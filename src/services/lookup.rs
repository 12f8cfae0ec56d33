//! Read-only lookups against the catalog.
//!
//! The cart never owns product or stock data. It asks for it through these two
//! traits on every operation that needs it.

use crate::model::{Product, ProductId, StockRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a lookup service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    /// The service has no record for this product.
    #[error("No record for {0}")]
    NotFound(ProductId),

    /// The service could not be reached or failed internally.
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),
}

/// Returns the current available quantity for a product.
#[async_trait]
pub trait StockLookup: Send + Sync {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, LookupError>;
}

/// Returns the display data for a product.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn product(&self, id: ProductId) -> Result<Product, LookupError>;
}
