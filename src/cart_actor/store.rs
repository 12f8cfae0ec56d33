//! # CartStore
//!
//! The cart's state and its three mutating operations.
//!
//! ## Commit protocol
//!
//! Every mutation follows the same order:
//!
//! 1. Read everything remote first (stock, then product data when needed).
//! 2. Validate against the fresh stock record. Nothing has changed yet.
//! 3. Build the next [`Cart`] as a new value.
//! 4. Serialize and write that value to storage.
//! 5. Publish the same value as the committed cart.
//!
//! A failure at any step leaves both the committed cart and the stored value
//! as they were. Each failure produces exactly one call to
//! [`Notifier::error`] and is also returned to the caller.
//!
//! Committed carts are published through a `watch` channel, so observers
//! obtained from [`CartStore::subscribe`] see every commit as an `Arc<Cart>`
//! snapshot that never changes after publication.

use super::error::CartError;
use crate::model::{Cart, CartEntry, ProductId};
use crate::services::{Notifier, PersistentStore, ProductLookup, StockLookup, StorageError};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Shown for out-of-stock and invalid-amount failures.
pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";
/// Shown for any other failure of `add_product`.
pub const ADD_FAILED_MESSAGE: &str = "Error adding product";
/// Shown for any failure of `remove_product`.
pub const REMOVE_FAILED_MESSAGE: &str = "Error removing product";
/// Shown for any other failure of `update_product_amount`.
pub const UPDATE_FAILED_MESSAGE: &str = "Error updating product amount";

/// The collaborators a cart calls out to.
#[derive(Clone)]
pub struct CartContext {
    pub stock: Arc<dyn StockLookup>,
    pub products: Arc<dyn ProductLookup>,
    pub storage: Arc<dyn PersistentStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl CartContext {
    pub fn new(
        stock: Arc<dyn StockLookup>,
        products: Arc<dyn ProductLookup>,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            stock,
            products,
            storage,
            notifier,
        }
    }

    /// Uses one service for both stock and product lookups.
    pub fn with_catalog<L>(
        catalog: L,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self
    where
        L: StockLookup + ProductLookup + 'static,
    {
        let catalog = Arc::new(catalog);
        Self::new(catalog.clone(), catalog, storage, notifier)
    }
}

/// Owns the committed cart and applies operations to it.
pub struct CartStore {
    ctx: CartContext,
    key: String,
    committed: watch::Sender<Arc<Cart>>,
}

impl CartStore {
    /// Restores the cart stored under `key`.
    ///
    /// A missing value starts an empty cart. So does an unreadable or corrupt
    /// one, after logging it: a broken stored cart must not block the session.
    pub async fn hydrate(ctx: CartContext, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match ctx.storage.read(&key).await {
            Ok(Some(raw)) => match Cart::from_json(&raw) {
                Ok(cart) => {
                    info!(%key, size = cart.len(), "Cart restored");
                    cart
                }
                Err(e) => {
                    warn!(%key, error = %e, "Stored cart is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => {
                debug!(%key, "No stored cart");
                Cart::new()
            }
            Err(e) => {
                warn!(%key, error = %e, "Stored cart unreadable, starting empty");
                Cart::new()
            }
        };
        let (committed, _) = watch::channel(Arc::new(cart));
        Self {
            ctx,
            key,
            committed,
        }
    }

    /// The currently committed cart.
    pub fn cart(&self) -> Arc<Cart> {
        self.committed.borrow().clone()
    }

    /// A receiver that observes every future commit.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.committed.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Adds one unit of `id`, appending a new entry if the product is not in the cart yet.
    pub async fn add_product(&mut self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_add_product(id).await;
        self.settle(result, ADD_FAILED_MESSAGE)
    }

    /// Removes the entry for `id`. No remote calls are made.
    pub async fn remove_product(&mut self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_remove_product(id).await;
        self.settle(result, REMOVE_FAILED_MESSAGE)
    }

    /// Sets the quantity of `id` to `amount`.
    pub async fn update_product_amount(
        &mut self,
        id: ProductId,
        amount: u32,
    ) -> Result<Arc<Cart>, CartError> {
        let result = self.try_update_product_amount(id, amount).await;
        self.settle(result, UPDATE_FAILED_MESSAGE)
    }

    async fn try_add_product(&mut self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        let stock = self.ctx.stock.stock(id).await?;
        let current = self.cart();
        let requested = current.quantity_of(id).saturating_add(1);

        if requested > stock.available {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested,
                available: stock.available,
            });
        }

        let next = if current.contains(id) {
            current.with_quantity(id, requested)
        } else {
            let product = self.ctx.products.product(id).await?;
            current.with_appended(CartEntry::new(&product, 1))
        };
        self.commit(next).await
    }

    async fn try_remove_product(&mut self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        let current = self.cart();
        if !current.contains(id) {
            return Err(CartError::NotFoundInCart(id));
        }
        self.commit(current.without(id)).await
    }

    async fn try_update_product_amount(
        &mut self,
        id: ProductId,
        amount: u32,
    ) -> Result<Arc<Cart>, CartError> {
        if !self.cart().contains(id) {
            return Err(CartError::NotFoundInCart(id));
        }

        let stock = self.ctx.stock.stock(id).await?;
        if amount == 0 {
            return Err(CartError::InvalidAmount {
                product_id: id,
                amount,
            });
        }
        if amount > stock.available {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: amount,
                available: stock.available,
            });
        }

        let next = self.cart().with_quantity(id, amount);
        self.commit(next).await
    }

    async fn commit(&mut self, next: Cart) -> Result<Arc<Cart>, CartError> {
        let next = Arc::new(next);
        let serialized = next.to_json().map_err(StorageError::from)?;
        self.ctx.storage.write(&self.key, &serialized).await?;
        self.committed.send_replace(next.clone());
        info!(
            key = %self.key,
            size = next.len(),
            items = next.total_items(),
            "Cart committed"
        );
        Ok(next)
    }

    fn settle(
        &self,
        result: Result<Arc<Cart>, CartError>,
        fallback: &str,
    ) -> Result<Arc<Cart>, CartError> {
        if let Err(e) = &result {
            let message = if e.is_out_of_stock() {
                OUT_OF_STOCK_MESSAGE
            } else {
                fallback
            };
            warn!(key = %self.key, error = %e, "Cart operation failed");
            self.ctx.notifier.error(message);
        }
        result
    }
}
