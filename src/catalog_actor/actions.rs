//! Requests understood by the catalog actor.

use crate::framework::Response;
use crate::model::{Product, ProductId};

/// Messages sent from [`CatalogClient`](crate::clients::CatalogClient) to the catalog actor.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Adds a product, or replaces it and its stock if the id is already listed.
    Insert {
        product: Product,
        stock: u32,
        respond_to: Response<()>,
    },
    GetProduct {
        id: ProductId,
        respond_to: Response<Option<Product>>,
    },
    /// Reads the current stock level without modifying it.
    CheckStock {
        id: ProductId,
        respond_to: Response<Option<u32>>,
    },
    /// Overwrites the stock level. Answers `false` for an unknown product.
    SetStock {
        id: ProductId,
        stock: u32,
        respond_to: Response<bool>,
    },
}
