//! Commands accepted by the cart actor and the changes they report.
//!
//! They are evaluated by the `ActorState` implementation in
//! [`entity`](super::entity).

use crate::model::ProductId;

/// Mutations of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of a product.
    ///
    /// A product already in the cart goes through the same stock check as
    /// `UpdateAmount` with its current amount + 1.
    AddItem(ProductId),

    /// Remove the product's line entirely.
    RemoveItem(ProductId),

    /// Set the amount of a product already in the cart.
    ///
    /// `amount <= 0` is ignored: removal is a separate command.
    UpdateAmount { product_id: ProductId, amount: i64 },
}

impl CartCommand {
    pub fn operation(&self) -> Operation {
        match self {
            CartCommand::AddItem(_) => Operation::AddItem,
            CartCommand::RemoveItem(_) => Operation::RemoveItem,
            CartCommand::UpdateAmount { .. } => Operation::UpdateAmount,
        }
    }
}

/// The user-facing operation a command belongs to; selects the failure notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddItem,
    RemoveItem,
    UpdateAmount,
}

/// What a successful command did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with amount 1.
    Added(ProductId),
    /// An existing line's amount was set.
    AmountChanged {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// A line was removed.
    Removed(ProductId),
    /// The command was a no-op by contract (e.g. `UpdateAmount` with amount <= 0).
    Ignored,
}
