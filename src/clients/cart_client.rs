//! # Cart Client
//!
//! The handle UI components hold to read and change the cart. Clones share
//! one actor, so every component sees the same committed cart.
use crate::cart_actor::{CartError, CartRequest};
use crate::framework::request;
use crate::model::{Cart, ProductId};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// The committed cart at the time the request is served.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        Ok(request(&self.sender, |respond_to| CartRequest::Get { respond_to }).await?)
    }

    /// An observer that is notified on every commit.
    #[instrument(skip(self))]
    pub async fn subscribe(&self) -> Result<watch::Receiver<Arc<Cart>>, CartError> {
        debug!("Sending request");
        Ok(request(&self.sender, |respond_to| CartRequest::Subscribe { respond_to }).await?)
    }

    /// Adds one unit of a product. Fails without changing the cart when stock runs out.
    #[instrument(skip(self))]
    pub async fn add_product(&self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::AddProduct { id, respond_to }).await?
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::RemoveProduct { id, respond_to }).await?
    }

    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        id: ProductId,
        amount: u32,
    ) -> Result<Arc<Cart>, CartError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CartRequest::UpdateProductAmount {
            id,
            amount,
            respond_to,
        })
        .await?
    }
}
