//! # Cart Actor
//!
//! The shopping cart: its committed contents, the three mutating operations,
//! and the actor that serializes access to them.
//!
//! - [`CartStore`] holds the state and implements add, remove and update
//!   against a [`CartContext`] of stock lookup, product lookup, storage and
//!   notifier.
//! - [`CartActor`] hosts one `CartStore` in its own task.
//! - [`CartClient`] is the handle the UI holds.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_store::cart_actor::{self, CartContext};
//! use cart_store::catalog_actor;
//! use cart_store::model::{Product, ProductId};
//! use cart_store::services::{MemoryStore, TracingNotifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (catalog, catalog_client) = catalog_actor::new(32);
//!     tokio::spawn(catalog.run());
//!     catalog_client
//!         .insert_product(Product::new(1, "Sneaker", 179.9, "sneaker.jpg"), 2)
//!         .await?;
//!
//!     let ctx = CartContext::with_catalog(
//!         catalog_client,
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(TracingNotifier),
//!     );
//!     let (actor, cart) = cart_actor::new(32);
//!     tokio::spawn(actor.run(ctx, "cart".to_string()));
//!
//!     cart.add_product(ProductId(1)).await?;
//!     let committed = cart.add_product(ProductId(1)).await?;
//!     assert_eq!(committed.quantity_of(ProductId(1)), 2);
//!
//!     // A third unit exceeds the stock of 2.
//!     assert!(cart.add_product(ProductId(1)).await.is_err());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod actor;
pub mod error;
pub mod store;

pub use actions::*;
pub use actor::*;
pub use error::*;
pub use store::*;

use crate::clients::CartClient;
use tokio::sync::mpsc;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (CartActor, CartClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartActor::new(receiver), CartClient::new(sender))
}
