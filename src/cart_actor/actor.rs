//! The cart actor task.

use super::actions::CartRequest;
use super::store::{CartContext, CartStore};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Hosts a [`CartStore`] and applies requests to it strictly one at a time.
///
/// Because each request runs to completion before the next is received, two
/// concurrent callers can never validate against the same stale cart.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
}

impl CartActor {
    pub(crate) fn new(receiver: mpsc::Receiver<CartRequest>) -> Self {
        Self { receiver }
    }

    /// Restores the cart stored under `storage_key`, then serves requests
    /// until every client is dropped.
    pub async fn run(mut self, context: CartContext, storage_key: String) {
        let mut store = CartStore::hydrate(context, storage_key).await;
        info!(
            actor = "Cart",
            key = store.storage_key(),
            size = store.cart().len(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Get { respond_to } => {
                    debug!(actor = "Cart", "Get");
                    let _ = respond_to.send(store.cart());
                }
                CartRequest::Subscribe { respond_to } => {
                    debug!(actor = "Cart", "Subscribe");
                    let _ = respond_to.send(store.subscribe());
                }
                CartRequest::AddProduct { id, respond_to } => {
                    debug!(actor = "Cart", %id, "AddProduct");
                    let _ = respond_to.send(store.add_product(id).await);
                }
                CartRequest::RemoveProduct { id, respond_to } => {
                    debug!(actor = "Cart", %id, "RemoveProduct");
                    let _ = respond_to.send(store.remove_product(id).await);
                }
                CartRequest::UpdateProductAmount {
                    id,
                    amount,
                    respond_to,
                } => {
                    debug!(actor = "Cart", %id, amount, "UpdateProductAmount");
                    let _ = respond_to.send(store.update_product_amount(id, amount).await);
                }
            }
        }

        let cart = store.cart();
        info!(
            actor = "Cart",
            size = cart.len(),
            items = cart.total_items(),
            "Shutdown"
        );
    }
}
