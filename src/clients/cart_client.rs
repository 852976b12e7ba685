use crate::cart_actor::{CartChange, CartCommand, CartError};
use crate::framework::{ActorClient, StateClient};
use crate::model::{Cart, ProductId};
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
///
/// Every method queues one command and waits for its result. Commands from
/// all clones of this client are applied one at a time, in arrival order.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        debug!("Sending add_item to actor");
        self.inner.send(CartCommand::AddItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        debug!("Sending remove_item to actor");
        self.inner.send(CartCommand::RemoveItem(product_id)).await
    }

    /// Sets the amount of a line. `amount <= 0` is answered with
    /// [`CartChange::Ignored`].
    #[instrument(skip(self))]
    pub async fn update_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<CartChange, CartError> {
        debug!("Sending update_amount to actor");
        self.inner
            .send(CartCommand::UpdateAmount { product_id, amount })
            .await
    }
}

impl ActorClient<Cart> for CartClient {
    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_command};

    #[tokio::test]
    async fn test_update_amount_sends_command_and_returns_reply() {
        let (inner, mut receiver) = create_mock_client::<Cart>(1, Cart::new());
        let client = CartClient::new(inner);

        let call = tokio::spawn(async move { client.update_amount(ProductId(4), 3).await });

        let (command, respond_to) = expect_command(&mut receiver).await.unwrap();
        assert_eq!(
            command,
            CartCommand::UpdateAmount {
                product_id: ProductId(4),
                amount: 3
            }
        );
        respond_to
            .send(Ok(CartChange::AmountChanged {
                product_id: ProductId(4),
                from: 1,
                to: 3,
            }))
            .unwrap();

        assert_eq!(
            call.await.unwrap(),
            Ok(CartChange::AmountChanged {
                product_id: ProductId(4),
                from: 1,
                to: 3
            })
        );
    }

    #[tokio::test]
    async fn test_errors_from_actor_are_forwarded() {
        let (inner, mut receiver) = create_mock_client::<Cart>(1, Cart::new());
        let client = CartClient::new(inner);

        let call = tokio::spawn(async move { client.remove_item(ProductId(2)).await });

        let (command, respond_to) = expect_command(&mut receiver).await.unwrap();
        assert_eq!(command, CartCommand::RemoveItem(ProductId(2)));
        respond_to
            .send(Err(CartError::LineNotFound(ProductId(2))))
            .unwrap();

        assert_eq!(
            call.await.unwrap(),
            Err(CartError::LineNotFound(ProductId(2)))
        );
    }

    #[tokio::test]
    async fn test_closed_actor_is_unavailable() {
        let (inner, receiver) = create_mock_client::<Cart>(1, Cart::new());
        drop(receiver);
        let client = CartClient::new(inner);

        let err = client.add_item(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, CartError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_snapshot_reads_without_actor() {
        let cart = Cart::new()
            .with_line(crate::model::CartLine::from_product(
                crate::model::Product::new(1, "Shoe", 100.0, "shoe.jpg"),
            ))
            .unwrap();
        let (inner, _receiver) = create_mock_client(1, cart.clone());
        let client = CartClient::new(inner);

        assert_eq!(client.snapshot(), cart);
    }
}
