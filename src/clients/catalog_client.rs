//! # Catalog Client
//!
//! Provides a high-level API for the catalog actor and adapts it to the
//! lookup traits the cart consumes.
use crate::catalog_actor::CatalogRequest;
use crate::framework::{request, FrameworkError};
use crate::model::{Product, ProductId, StockRecord};
use crate::services::{LookupError, ProductLookup, StockLookup};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

impl From<FrameworkError> for LookupError {
    fn from(e: FrameworkError) -> Self {
        LookupError::Unavailable(e.to_string())
    }
}

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Lists a product with the given stock, replacing any previous listing.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn insert_product(&self, product: Product, stock: u32) -> Result<(), LookupError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Insert {
            product,
            stock,
            respond_to,
        })
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, LookupError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::GetProduct { id, respond_to })
            .await?
            .ok_or(LookupError::NotFound(id))
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, LookupError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::CheckStock { id, respond_to })
            .await?
            .ok_or(LookupError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, stock: u32) -> Result<(), LookupError> {
        debug!("Sending request");
        let found = request(&self.sender, |respond_to| CatalogRequest::SetStock {
            id,
            stock,
            respond_to,
        })
        .await?;
        if found {
            Ok(())
        } else {
            Err(LookupError::NotFound(id))
        }
    }
}

#[async_trait]
impl StockLookup for CatalogClient {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, LookupError> {
        let available = self.check_stock(id).await?;
        Ok(StockRecord {
            product_id: id,
            available,
        })
    }
}

#[async_trait]
impl ProductLookup for CatalogClient {
    async fn product(&self, id: ProductId) -> Result<Product, LookupError> {
        self.get_product(id).await
    }
}
