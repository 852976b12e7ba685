//! Cart-specific state logic: adding, removing and re-quantifying lines
//! against the catalog and live stock.

mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use entity::CartContext;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::{FrameworkError, StateActor};
use crate::model::Cart;
use crate::storage::Storage;

/// Creates a new Cart actor and its client, restoring the cart persisted
/// under `<namespace>:cart`.
pub fn new(
    buffer_size: usize,
    storage: impl Storage + 'static,
    namespace: &str,
) -> Result<(StateActor<Cart>, CartClient), FrameworkError> {
    let (actor, generic_client) = StateActor::new(buffer_size, storage, namespace)?;
    let client = CartClient::new(generic_client);

    Ok((actor, client))
}
