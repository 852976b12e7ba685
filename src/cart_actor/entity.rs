//! ActorState implementation for the Cart.
//!
//! This module contains the [`ActorState`] implementation that lets [`Cart`]
//! be owned by the generic [`crate::framework::StateActor`], together with the
//! [`CartContext`] carrying the catalog and stock services.
//!
//! See the trait implementation on [`Cart`] for the rules of each command.

use super::{CartChange, CartCommand, CartError};
use crate::framework::{ActorState, Transition};
use crate::model::{Cart, CartLine, ProductId};
use crate::services::{ProductCatalog, ServiceError, StockService};
use async_trait::async_trait;
use std::sync::Arc;

/// Collaborators of the cart actor, injected at `run()`.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: Arc<dyn ProductCatalog>,
    pub stock: Arc<dyn StockService>,
}

impl CartContext {
    pub fn new(
        catalog: impl ProductCatalog + 'static,
        stock: impl StockService + 'static,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            stock: Arc::new(stock),
        }
    }
}

#[async_trait]
impl ActorState for Cart {
    const SLOT: &'static str = "cart";

    type Command = CartCommand;
    type Outcome = CartChange;
    type Context = CartContext;
    type Error = CartError;

    /// Handles cart commands.
    ///
    /// # Commands
    /// - `AddItem`: existing line → `UpdateAmount(current + 1)`; new line →
    ///   one catalog lookup, appended with amount 1 (no stock check)
    /// - `RemoveItem`: drops the line, `LineNotFound` if there is none
    /// - `UpdateAmount`: `amount <= 0` is ignored without a stock lookup;
    ///   otherwise the line must exist and `amount` must not exceed stock
    async fn handle(
        &self,
        command: CartCommand,
        ctx: &CartContext,
    ) -> Result<Transition<Cart, CartChange>, CartError> {
        match command {
            CartCommand::AddItem(product_id) => self.add_item(product_id, ctx).await,
            CartCommand::RemoveItem(product_id) => self.remove_item(product_id),
            CartCommand::UpdateAmount { product_id, amount } => {
                self.update_amount(product_id, amount, ctx).await
            }
        }
    }
}

impl Cart {
    async fn add_item(
        &self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<Transition<Cart, CartChange>, CartError> {
        if let Some(current) = self.amount_of(product_id) {
            return self
                .update_amount(product_id, i64::from(current) + 1, ctx)
                .await;
        }

        let product = ctx
            .catalog
            .product(product_id)
            .await
            .map_err(|source| CartError::CatalogLookupFailed { product_id, source })?;
        if product.id != product_id {
            return Err(CartError::CatalogLookupFailed {
                product_id,
                source: ServiceError::Malformed(format!("catalog answered with {}", product.id)),
            });
        }

        let state = self.with_line(CartLine::from_product(product))?;
        Ok(Transition::Commit {
            state,
            outcome: CartChange::Added(product_id),
        })
    }

    fn remove_item(&self, product_id: ProductId) -> Result<Transition<Cart, CartChange>, CartError> {
        let state = self.without(product_id)?;
        Ok(Transition::Commit {
            state,
            outcome: CartChange::Removed(product_id),
        })
    }

    async fn update_amount(
        &self,
        product_id: ProductId,
        amount: i64,
        ctx: &CartContext,
    ) -> Result<Transition<Cart, CartChange>, CartError> {
        if amount <= 0 {
            return Ok(Transition::Keep(CartChange::Ignored));
        }
        let current = self
            .amount_of(product_id)
            .ok_or(CartError::LineNotFound(product_id))?;

        let stock = ctx
            .stock
            .stock(product_id)
            .await
            .map_err(|source| CartError::StockLookupFailed { product_id, source })?;
        let exceeded = CartError::StockExceeded {
            product_id,
            requested: amount,
            available: stock.available,
        };
        if amount > i64::from(stock.available) {
            return Err(exceeded);
        }
        let Ok(to) = u32::try_from(amount) else {
            return Err(exceeded);
        };

        let state = self.with_amount(product_id, to)?;
        Ok(Transition::Commit {
            state,
            outcome: CartChange::AmountChanged {
                product_id,
                from: current,
                to,
            },
        })
    }
}
