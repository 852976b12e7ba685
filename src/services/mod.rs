//! # External Collaborators
//!
//! The cart depends on two services it does not own:
//!
//! - [`ProductCatalog`] - product metadata (name, price, image) by id
//! - [`StockService`] - how many units of a product can currently be bought
//!
//! Both are traits so the cart actor can be wired to any backend at `run()`
//! time (see [`CartContext`](crate::cart_actor::CartContext)).
//!
//! ## Implementations
//!
//! - [`InMemoryInventory`] - both traits over in-process maps
//! - [`ApiClient`] - both traits over the product API (`/products/:id`, `/stock/:id`)
//! - [`mock::MockCatalog`] / [`mock::MockStock`] - expectation queues for tests

pub mod http;
pub mod memory;
pub mod mock;

pub use http::*;
pub use memory::*;

use crate::model::{Product, ProductId, StockInfo};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The service has no record of the product.
    #[error("{0} not found")]
    NotFound(ProductId),

    /// The service could not be reached or answered with an error.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a payload that could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Lookup of product metadata.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError>;
}

/// Lookup of available stock. Every call is a fresh query; nothing is cached.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn stock(&self, id: ProductId) -> Result<StockInfo, ServiceError>;
}
