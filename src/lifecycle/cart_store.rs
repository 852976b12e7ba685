use crate::cart_actor::{self, CartChange, CartContext, CartError, Operation};
use crate::clients::CartClient;
use crate::framework::{ActorClient, FrameworkError};
use crate::lifecycle::CartConfig;
use crate::model::{Cart, ProductId};
use crate::notify::{Locale, Notifier};
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The shopping cart as seen by a UI.
///
/// `CartStore` is responsible for:
/// - **Lifecycle Management**: spawning the cart actor and stopping it
/// - **Dependency Wiring**: handing the catalog and stock services to the actor
/// - **Notification Boundary**: turning every failed operation into one
///   localized message on the [`Notifier`]
///
/// Operations still return their `Result`, so callers that want to react
/// programmatically can; callers that only render the cart can ignore it.
///
/// # Example
///
/// ```ignore
/// let store = CartStore::start(&config, storage, context, TracingNotifier)?;
///
/// store.add_item(ProductId(1)).await.ok();
/// let mut updates = store.subscribe();
/// updates.changed().await?;
/// render(&updates.borrow());
///
/// store.shutdown().await?;
/// ```
pub struct CartStore {
    client: CartClient,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
    handle: Option<JoinHandle<()>>,
}

impl CartStore {
    /// Restores the persisted cart and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::Storage`] if the persisted cart cannot be
    /// read. An unreadable *value* is not an error; the cart starts empty.
    pub fn start(
        config: &CartConfig,
        storage: impl Storage + 'static,
        context: CartContext,
        notifier: impl Notifier + 'static,
    ) -> Result<Self, FrameworkError> {
        let (actor, client) =
            cart_actor::new(config.queue_size, storage, &config.namespace)?;
        let handle = tokio::spawn(actor.run(context));
        info!(namespace = %config.namespace, lines = client.snapshot().len(), "Cart store started");

        Ok(Self {
            client,
            notifier: Arc::new(notifier),
            locale: config.locale,
            handle: Some(handle),
        })
    }

    /// Wraps an existing client; no actor is owned, so `shutdown` only
    /// drops the client.
    pub fn from_client(client: CartClient, notifier: impl Notifier + 'static, locale: Locale) -> Self {
        Self {
            client,
            notifier: Arc::new(notifier),
            locale,
            handle: None,
        }
    }

    pub async fn add_item(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        let result = self.client.add_item(product_id).await;
        self.report(Operation::AddItem, result)
    }

    pub async fn remove_item(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        let result = self.client.remove_item(product_id).await;
        self.report(Operation::RemoveItem, result)
    }

    pub async fn update_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<CartChange, CartError> {
        let result = self.client.update_amount(product_id, amount).await;
        self.report(Operation::UpdateAmount, result)
    }

    /// The last committed cart.
    pub fn cart(&self) -> Cart {
        self.client.snapshot()
    }

    /// A receiver that sees every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.client.subscribe()
    }

    /// A client sharing this store's actor. Operations through it are not
    /// reported to the notifier.
    pub fn client(&self) -> &CartClient {
        &self.client
    }

    fn report(
        &self,
        operation: Operation,
        result: Result<CartChange, CartError>,
    ) -> Result<CartChange, CartError> {
        if let Err(e) = &result {
            let notice = e.notice(operation);
            self.notifier.notify_error(notice.message(self.locale));
        }
        result
    }

    /// Gracefully shuts down the cart actor.
    ///
    /// Dropping the store's client closes the command channel once no other
    /// clone of it is alive; the actor then drains its queue and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart store...");
        drop(self.client);

        if let Some(handle) = self.handle {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart store shutdown complete.");
        Ok(())
    }
}
