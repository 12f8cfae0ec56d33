//! Error types for the Cart actor.

use crate::framework::FrameworkError;
use crate::model::ProductId;
use crate::services::{LookupError, StorageError};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stock or product record could not be fetched.
    #[error("Product lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested absolute quantity is zero.
    #[error("Invalid amount for {product_id}: {amount}")]
    InvalidAmount { product_id: ProductId, amount: u32 },

    /// The product targeted by a removal or update is not in the cart.
    #[error("Product not in cart: {0}")]
    NotFoundInCart(ProductId),

    /// The updated cart could not be persisted.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// True for the failures the user sees as "requested quantity unavailable".
    pub fn is_out_of_stock(&self) -> bool {
        matches!(
            self,
            CartError::OutOfStock { .. } | CartError::InvalidAmount { .. }
        )
    }
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        CartError::ActorCommunicationError(e.to_string())
    }
}
