use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Serialized as a bare integer, which is how both the catalog API and the
/// persisted cart snapshot spell product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product as described by the catalog.
///
/// # Cart Usage
/// The cart never owns products. When a product is first added, its display
/// metadata is copied into a [`CartLine`](crate::model::CartLine) so the UI can
/// render the cart without asking the catalog again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price, shown as-is (the cart does no arithmetic on it)
    /// * `image` - Image URL
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// Stock level reported by the stock service at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockInfo {
    pub product_id: ProductId,
    pub available: u32,
}

impl StockInfo {
    pub fn new(product_id: impl Into<ProductId>, available: u32) -> Self {
        Self {
            product_id: product_id.into(),
            available,
        }
    }
}
