use crate::cart_actor::{self, CartContext};
use crate::catalog_actor;
use crate::clients::{CartClient, CatalogClient};
use crate::config::CartConfig;
use crate::services::{Notifier, PersistentStore};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts and stops the actors behind one shopping session.
///
/// The catalog actor stands in for the remote product and stock service. The
/// cart actor is wired to it through a [`CartContext`] at spawn time, together
/// with the storage backend and notifier supplied by the caller.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use cart_store::config::CartConfig;
/// use cart_store::lifecycle::CartSystem;
/// use cart_store::model::{Product, ProductId};
/// use cart_store::services::{MemoryStore, TracingNotifier};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CartSystem::new(
///         &CartConfig::default(),
///         Arc::new(MemoryStore::new()),
///         Arc::new(TracingNotifier),
///     );
///
///     system
///         .catalog_client
///         .insert_product(Product::new(1, "Sneaker", 179.9, "sneaker.jpg"), 3)
///         .await?;
///     system.cart_client.add_product(ProductId(1)).await?;
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CartSystem {
    pub cart_client: CartClient,
    pub catalog_client: CatalogClient,
    cart_handle: JoinHandle<()>,
    catalog_handle: JoinHandle<()>,
}

impl CartSystem {
    /// Spawns both actors. Must be called inside a Tokio runtime.
    pub fn new(
        config: &CartConfig,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (catalog_actor, catalog_client) = catalog_actor::new(config.buffer_size);
        let (cart_actor, cart_client) = cart_actor::new(config.buffer_size);

        let catalog_handle = tokio::spawn(catalog_actor.run());

        let context = CartContext::with_catalog(catalog_client.clone(), storage, notifier);
        let cart_handle = tokio::spawn(cart_actor.run(context, config.storage_key.clone()));

        info!(key = %config.storage_key, "Cart system started");

        Self {
            cart_client,
            catalog_client,
            cart_handle,
            catalog_handle,
        }
    }

    /// Stops the cart, then the catalog.
    ///
    /// The cart actor holds a catalog client of its own, so the catalog can
    /// only observe a closed channel after the cart task has finished.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down cart system...");

        drop(self.cart_client);
        if let Err(e) = self.cart_handle.await {
            error!(actor = "Cart", error = %e, "Actor task failed");
            return Err(e);
        }

        drop(self.catalog_client);
        if let Err(e) = self.catalog_handle.await {
            error!(actor = "Catalog", error = %e, "Actor task failed");
            return Err(e);
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
