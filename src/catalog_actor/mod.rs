//! # Catalog Actor
//!
//! An in-process product catalog with stock levels. It plays the part of the
//! remote product/stock service for the demo binary and the integration tests:
//! [`CatalogClient`] implements both [`StockLookup`](crate::services::StockLookup)
//! and [`ProductLookup`](crate::services::ProductLookup), so a cart can be wired
//! to it directly.
//!
//! ## Usage
//!
//! ```rust
//! use cart_store::catalog_actor;
//! use cart_store::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client
//!         .insert_product(Product::new(1, "Sneaker", 179.9, "sneaker.jpg"), 3)
//!         .await?;
//!     assert_eq!(client.check_stock(ProductId(1)).await?, 3);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod actor;

pub use actions::*;
pub use actor::*;

use crate::clients::CatalogClient;
use tokio::sync::mpsc;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (CatalogActor, CatalogClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogActor::new(receiver), CatalogClient::new(sender))
}
