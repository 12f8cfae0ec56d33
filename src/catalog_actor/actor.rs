//! The catalog actor task.

use super::actions::CatalogRequest;
use crate::model::{Product, ProductId};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct Listing {
    product: Product,
    stock: u32,
}

/// Owns the product listings and their stock, processing requests one at a time.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    listings: HashMap<ProductId, Listing>,
}

impl CatalogActor {
    pub(crate) fn new(receiver: mpsc::Receiver<CatalogRequest>) -> Self {
        Self {
            receiver,
            listings: HashMap::new(),
        }
    }

    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!(actor = "Catalog", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Insert {
                    product,
                    stock,
                    respond_to,
                } => {
                    let id = product.id;
                    self.listings.insert(id, Listing { product, stock });
                    info!(actor = "Catalog", %id, stock, size = self.listings.len(), "Listed");
                    let _ = respond_to.send(());
                }
                CatalogRequest::GetProduct { id, respond_to } => {
                    let product = self.listings.get(&id).map(|l| l.product.clone());
                    debug!(actor = "Catalog", %id, found = product.is_some(), "GetProduct");
                    let _ = respond_to.send(product);
                }
                CatalogRequest::CheckStock { id, respond_to } => {
                    let stock = self.listings.get(&id).map(|l| l.stock);
                    debug!(actor = "Catalog", %id, ?stock, "CheckStock");
                    let _ = respond_to.send(stock);
                }
                CatalogRequest::SetStock {
                    id,
                    stock,
                    respond_to,
                } => match self.listings.get_mut(&id) {
                    Some(listing) => {
                        listing.stock = stock;
                        info!(actor = "Catalog", %id, stock, "Stock set");
                        let _ = respond_to.send(true);
                    }
                    None => {
                        warn!(actor = "Catalog", %id, "Not found");
                        let _ = respond_to.send(false);
                    }
                },
            }
        }

        info!(actor = "Catalog", size = self.listings.len(), "Shutdown");
    }
}
