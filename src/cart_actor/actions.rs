//! Requests understood by the cart actor.

use super::error::CartError;
use crate::framework::Response;
use crate::model::{Cart, ProductId};
use std::sync::Arc;
use tokio::sync::watch;

/// Outcome of a mutating cart request: the committed cart, or why nothing changed.
pub type CartResult = Result<Arc<Cart>, CartError>;

/// Messages sent from [`CartClient`](crate::clients::CartClient) to the cart actor.
#[derive(Debug)]
pub enum CartRequest {
    /// Reads the committed cart.
    Get { respond_to: Response<Arc<Cart>> },
    /// Opens an observer on the committed cart.
    Subscribe {
        respond_to: Response<watch::Receiver<Arc<Cart>>>,
    },
    AddProduct {
        id: ProductId,
        respond_to: Response<CartResult>,
    },
    RemoveProduct {
        id: ProductId,
        respond_to: Response<CartResult>,
    },
    /// Sets an absolute quantity for a product already in the cart.
    UpdateProductAmount {
        id: ProductId,
        amount: u32,
        respond_to: Response<CartResult>,
    },
}
