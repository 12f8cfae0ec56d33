//! The cart value and its entries.
//!
//! A [`Cart`] is an ordered list of [`CartEntry`] values with at most one entry
//! per [`ProductId`]. New products are appended; quantity changes keep the
//! entry in place.
//!
//! The type is immutable from the outside: every mutating helper returns a new
//! `Cart` and leaves `self` untouched, so a snapshot handed to an observer can
//! never change underneath it.
//!
//! ## Persisted layout
//!
//! A cart serializes as a JSON array of flat objects:
//!
//! ```json
//! [{"productId": 10, "title": "Sneaker", "price": 179.9, "image": "https://…", "quantity": 2}]
//! ```
//!
//! Values written by older storefront builds used `id` and `amount`; both are
//! accepted when reading.

use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Product fields copied into the cart when the product is first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDisplay {
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl From<&Product> for ProductDisplay {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    #[serde(alias = "id")]
    pub product_id: ProductId,
    #[serde(flatten)]
    pub display: ProductDisplay,
    #[serde(alias = "amount")]
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            display: ProductDisplay::from(product),
            quantity,
        }
    }

    /// Price of the whole line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.display.price * f64::from(self.quantity)
    }
}

/// Ordered collection of cart entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw entries.
    ///
    /// Entries with a zero quantity are dropped, and only the first entry for
    /// each product is kept.
    pub fn from_entries(entries: impl IntoIterator<Item = CartEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| entry.quantity > 0 && seen.insert(entry.product_id))
            .collect();
        Self { entries }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CartEntry> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.product_id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity currently in the cart for `id`, or 0 when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |entry| entry.quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Returns a copy with the entry for `id` set to `quantity`, keeping its position.
    ///
    /// If `id` is not in the cart the copy is identical to `self`.
    pub fn with_quantity(&self, id: ProductId, quantity: u32) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.product_id == id {
                    CartEntry {
                        quantity,
                        ..entry.clone()
                    }
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self { entries }
    }

    /// Returns a copy with `entry` appended at the end.
    pub fn with_appended(&self, entry: CartEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// Returns a copy without the entry for `id`.
    pub fn without(&self, id: ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.product_id != id)
            .cloned()
            .collect();
        Self { entries }
    }
}
