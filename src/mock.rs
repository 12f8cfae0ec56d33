//! # Mocks & Testing Guide
//!
//! [`MockLookup`] stands in for the remote catalog. It implements both
//! [`StockLookup`] and [`ProductLookup`] and answers from a FIFO queue of
//! expectations, so a test states exactly which lookups an operation must
//! perform, in which order, and what they return. [`RecordingNotifier`]
//! captures the user-facing messages.
//!
//! ## When to use Mocks vs the Catalog Actor
//!
//! | Feature | MockLookup | Catalog actor |
//! |---------|------------|---------------|
//! | **Call checking** | Every lookup is asserted | None |
//! | **State** | No real state (expectations) | Real listings and stock |
//! | **Use Case** | Testing `CartStore` and the cart actor in isolation | Full system tests |
//! | **Error Injection** | Easy (`return_err`) | Only "not found" |
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_store::cart_actor::{CartContext, CartStore};
//! use cart_store::mock::{MockLookup, RecordingNotifier};
//! use cart_store::model::{Product, ProductId};
//! use cart_store::services::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut lookup = MockLookup::new();
//!     lookup.expect_stock(ProductId(10)).return_ok(5);
//!     lookup
//!         .expect_product(ProductId(10))
//!         .return_ok(Product::new(10, "Sneaker", 179.9, "s.jpg"));
//!
//!     let notifier = RecordingNotifier::new();
//!     let ctx = CartContext::with_catalog(
//!         lookup.clone(),
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(notifier.clone()),
//!     );
//!     let mut store = CartStore::hydrate(ctx, "cart").await;
//!
//!     let cart = store.add_product(ProductId(10)).await.unwrap();
//!     assert_eq!(cart.quantity_of(ProductId(10)), 1);
//!
//!     lookup.verify();
//!     assert!(notifier.messages().is_empty());
//! }
//! ```
//!
//! A lookup that arrives when the queue is empty, or that does not match the
//! next expectation, panics. A `MockLookup` with no expectations therefore
//! proves an operation made no remote calls.

use crate::model::{Product, ProductId, StockRecord};
use crate::services::{LookupError, Notifier, ProductLookup, StockLookup};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Locks, ignoring poison left by a failed assertion.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected lookup and the response to give.
#[derive(Debug)]
enum Expectation {
    Stock {
        id: ProductId,
        response: Result<u32, LookupError>,
    },
    Product {
        id: ProductId,
        response: Result<Product, LookupError>,
    },
}

/// Scripted stock and product lookups. Clones share one expectation queue.
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockLookup {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a stock lookup for `id`.
    pub fn expect_stock(&mut self, id: ProductId) -> StockExpectationBuilder {
        StockExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a product lookup for `id`.
    pub fn expect_product(&mut self, id: ProductId) -> ProductExpectationBuilder {
        ProductExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = lock(&self.expectations);
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining: {:?}", exps.len(), exps);
        }
    }

    fn next(&self) -> Option<Expectation> {
        lock(&self.expectations).pop_front()
    }
}

#[async_trait]
impl StockLookup for MockLookup {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, LookupError> {
        match self.next() {
            Some(Expectation::Stock {
                id: expected,
                response,
            }) => {
                assert_eq!(id, expected, "Stock lookup for an unexpected product");
                response.map(|available| StockRecord {
                    product_id: id,
                    available,
                })
            }
            other => panic!("Unexpected stock lookup for {id}; next expectation: {other:?}"),
        }
    }
}

#[async_trait]
impl ProductLookup for MockLookup {
    async fn product(&self, id: ProductId) -> Result<Product, LookupError> {
        match self.next() {
            Some(Expectation::Product {
                id: expected,
                response,
            }) => {
                assert_eq!(id, expected, "Product lookup for an unexpected product");
                response
            }
            other => panic!("Unexpected product lookup for {id}; next expectation: {other:?}"),
        }
    }
}

/// Builder for stock expectations.
pub struct StockExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl StockExpectationBuilder {
    /// Answers with `available` units in stock.
    pub fn return_ok(self, available: u32) {
        lock(&self.expectations).push_back(Expectation::Stock {
            id: self.id,
            response: Ok(available),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LookupError) {
        lock(&self.expectations).push_back(Expectation::Stock {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for product expectations.
pub struct ProductExpectationBuilder {
    id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ProductExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, product: Product) {
        lock(&self.expectations).push_back(Expectation::Product {
            id: self.id,
            response: Ok(product),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LookupError) {
        lock(&self.expectations).push_back(Expectation::Product {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Collects every notification. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_expectations_are_answered_in_order() {
        let mut lookup = MockLookup::new();
        lookup.expect_stock(ProductId(1)).return_ok(3);
        lookup
            .expect_product(ProductId(1))
            .return_err(LookupError::NotFound(ProductId(1)));

        let stock = lookup.stock(ProductId(1)).await.unwrap();
        assert_eq!(stock.available, 3);

        let product = lookup.product(ProductId(1)).await;
        assert_eq!(product, Err(LookupError::NotFound(ProductId(1))));

        lookup.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected stock lookup")]
    async fn test_unexpected_call_panics() {
        let lookup = MockLookup::new();
        let _ = lookup.stock(ProductId(1)).await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mut lookup = MockLookup::new();
        lookup.expect_stock(ProductId(1)).return_ok(3);
        lookup.verify();
    }
}
