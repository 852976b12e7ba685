//! Error types for the Cart actor.

use super::Operation;
use crate::framework::FrameworkError;
use crate::model::{InvalidCart, ProductId};
use crate::notify::Notice;
use crate::services::ServiceError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Any of these leaves the cart, its persisted snapshot and its subscribers
/// exactly as they were before the command.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The catalog lookup failed or the product does not exist.
    #[error("Catalog lookup failed for {product_id}: {source}")]
    CatalogLookupFailed {
        product_id: ProductId,
        source: ServiceError,
    },

    /// The stock lookup failed.
    #[error("Stock lookup failed for {product_id}: {source}")]
    StockLookupFailed {
        product_id: ProductId,
        source: ServiceError,
    },

    /// The requested amount exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },

    /// The product has no line in the cart.
    #[error("{0} is not in the cart")]
    LineNotFound(ProductId),

    /// The new state would break a cart invariant.
    #[error("Cart invariant violated: {0}")]
    InvariantViolated(InvalidCart),

    /// The new snapshot could not be written to storage.
    #[error("Cart snapshot could not be persisted: {0}")]
    PersistenceFailed(String),

    /// The cart actor is not running.
    #[error("Cart actor unavailable: {0}")]
    Unavailable(String),
}

impl CartError {
    /// The notice shown to the user when `operation` fails with this error.
    ///
    /// Exceeding stock has its own notice whichever operation hit it. Stock is
    /// only queried on the quantity-update path (which an add of a product
    /// already in the cart goes through), so a failed stock lookup is always a
    /// quantity-update failure. Every other failure is reported under the
    /// operation the user invoked.
    pub fn notice(&self, operation: Operation) -> Notice {
        match (self, operation) {
            (CartError::StockExceeded { .. }, _) => Notice::OutOfStock,
            (CartError::StockLookupFailed { .. }, _) => Notice::UpdateFailed,
            (_, Operation::AddItem) => Notice::AddFailed,
            (_, Operation::RemoveItem) => Notice::RemoveFailed,
            (_, Operation::UpdateAmount) => Notice::UpdateFailed,
        }
    }
}

impl From<InvalidCart> for CartError {
    fn from(e: InvalidCart) -> Self {
        match e {
            InvalidCart::MissingLine(id) => CartError::LineNotFound(id),
            other => CartError::InvariantViolated(other),
        }
    }
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Encoding(_) | FrameworkError::Storage(_) => {
                CartError::PersistenceFailed(e.to_string())
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                CartError::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_stock_exceeded_always_maps_to_out_of_stock() {
        let err = CartError::StockExceeded {
            product_id: ProductId(1),
            requested: 10,
            available: 5,
        };
        assert_eq!(err.notice(Operation::AddItem), Notice::OutOfStock);
        assert_eq!(err.notice(Operation::UpdateAmount), Notice::OutOfStock);
    }

    #[test]
    fn test_stock_lookup_failure_is_an_update_failure() {
        let err = CartError::StockLookupFailed {
            product_id: ProductId(1),
            source: ServiceError::Unavailable("down".into()),
        };
        assert_eq!(err.notice(Operation::AddItem), Notice::UpdateFailed);
        assert_eq!(err.notice(Operation::UpdateAmount), Notice::UpdateFailed);
    }

    #[test]
    fn test_other_errors_map_to_operation() {
        let err = CartError::LineNotFound(ProductId(1));
        assert_eq!(err.notice(Operation::RemoveItem), Notice::RemoveFailed);
        assert_eq!(err.notice(Operation::UpdateAmount), Notice::UpdateFailed);

        let err = CartError::CatalogLookupFailed {
            product_id: ProductId(99),
            source: ServiceError::NotFound(ProductId(99)),
        };
        assert_eq!(err.notice(Operation::AddItem), Notice::AddFailed);
    }

    #[test]
    fn test_framework_errors_are_absorbed() {
        let storage = FrameworkError::Storage(StorageError::Unavailable("disk full".into()));
        assert!(matches!(
            CartError::from(storage),
            CartError::PersistenceFailed(msg) if msg.contains("disk full")
        ));
        assert!(matches!(
            CartError::from(FrameworkError::ActorClosed),
            CartError::Unavailable(_)
        ));
        assert_eq!(
            CartError::from(InvalidCart::MissingLine(ProductId(3))),
            CartError::LineNotFound(ProductId(3))
        );
    }
}
