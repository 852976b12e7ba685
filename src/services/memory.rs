use super::{ProductCatalog, ServiceError, StockService};
use crate::model::{Product, ProductId, StockInfo};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct Inventory {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
}

/// In-process catalog and stock service.
///
/// Clones share the same inventory, so a test (or the demo binary) can keep a
/// handle and change stock levels while the cart actor holds another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `product` with `available` units in stock.
    pub fn with_product(self, product: Product, available: u32) -> Self {
        self.insert(product, available);
        self
    }

    pub fn insert(&self, product: Product, available: u32) {
        let mut inventory = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inventory.stock.insert(product.id, available);
        inventory.products.insert(product.id, product);
    }

    pub fn set_stock(&self, id: ProductId, available: u32) {
        let mut inventory = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inventory.stock.insert(id, available);
    }
}

#[async_trait]
impl ProductCatalog for InMemoryInventory {
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        let inventory = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inventory
            .products
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }
}

#[async_trait]
impl StockService for InMemoryInventory {
    async fn stock(&self, id: ProductId) -> Result<StockInfo, ServiceError> {
        let inventory = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inventory
            .stock
            .get(&id)
            .map(|&available| StockInfo::new(id, available))
            .ok_or(ServiceError::NotFound(id))
    }
}
