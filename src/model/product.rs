//! Catalog-side data returned by the product and stock lookups.
//!
//! Neither type is owned by the cart: a [`Product`] is copied into a
//! [`CartEntry`](crate::model::CartEntry) when it is first added, and a
//! [`StockRecord`] is fetched fresh for every operation and never cached.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `title` - Display name
    /// * `price` - Unit price
    /// * `image` - Image URL
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

/// Current availability of a product, as reported by the stock lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub available: u32,
}
