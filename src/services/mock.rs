//! # Mock Collaborators
//!
//! Expectation-based fakes for [`ProductCatalog`] and [`StockService`].
//!
//! Each mock holds a queue of expected lookups. Every call pops the next
//! expectation, checks the product id, and returns the scripted response. A
//! call with no expectation left, or for a different id, panics; [`MockLookup::verify`]
//! panics if expectations were left unused.
//!
//! # Example
//! ```
//! use cart_store::model::{ProductId, StockInfo};
//! use cart_store::services::mock::MockStock;
//! use cart_store::services::{ServiceError, StockService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let stock = MockStock::new();
//!     stock.expect_get(ProductId(1)).return_ok(StockInfo::new(1, 5));
//!     stock.expect_get(ProductId(2)).return_err(ServiceError::Unavailable("timeout".into()));
//!
//!     assert_eq!(stock.stock(ProductId(1)).await.unwrap().available, 5);
//!     assert!(stock.stock(ProductId(2)).await.is_err());
//!
//!     stock.verify();
//! }
//! ```

use super::{ProductCatalog, ServiceError, StockService};
use crate::model::{Product, ProductId, StockInfo};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One scripted lookup.
struct Expectation<T> {
    id: ProductId,
    response: Result<T, ServiceError>,
}

/// Shared state of a mock: what is still expected and what was called.
struct Script<T> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<ProductId>,
}

/// A lookup service that answers from a queue of expectations.
///
/// Clones share the same queue, so the test keeps one handle for `verify()`
/// while the actor owns another.
pub struct MockLookup<T> {
    script: Arc<Mutex<Script<T>>>,
}

/// Mock [`ProductCatalog`].
pub type MockCatalog = MockLookup<Product>;

/// Mock [`StockService`].
pub type MockStock = MockLookup<StockInfo>;

impl<T> Clone for MockLookup<T> {
    fn clone(&self) -> Self {
        Self {
            script: self.script.clone(),
        }
    }
}

impl<T> Default for MockLookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MockLookup<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                expectations: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Expects a lookup of `id`.
    pub fn expect_get(&self, id: ProductId) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    /// Every id looked up so far, in call order.
    pub fn calls(&self) -> Vec<ProductId> {
        self.lock().calls.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let script = self.lock();
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }

    fn lock(&self) -> MutexGuard<'_, Script<T>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer(&self, id: ProductId) -> Result<T, ServiceError> {
        let mut script = self.lock();
        script.calls.push(id);
        match script.expectations.pop_front() {
            Some(expectation) if expectation.id == id => expectation.response,
            Some(expectation) => panic!(
                "Unexpected lookup of {id}: expected {}",
                expectation.id
            ),
            None => panic!("Unexpected lookup of {id}: no expectations left"),
        }
    }
}

/// Builder for lookup expectations.
pub struct ExpectationBuilder<T> {
    id: ProductId,
    script: Arc<Mutex<Script<T>>>,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ServiceError>) {
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        script.expectations.push_back(Expectation {
            id: self.id,
            response,
        });
    }
}

#[async_trait]
impl ProductCatalog for MockLookup<Product> {
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.answer(id)
    }
}

#[async_trait]
impl StockService for MockLookup<StockInfo> {
    async fn stock(&self, id: ProductId) -> Result<StockInfo, ServiceError> {
        self.answer(id)
    }
}
