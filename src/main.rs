//! # Cart Store demo
//!
//! Runs one shopping session against the configured storage and inventory:
//!
//! 1.  Add a shoe twice (the second add goes through the stock check).
//! 2.  Ask for more than is in stock (rejected, the user is notified).
//! 3.  Remove the shoe, then remove it again (rejected, notified).
//! 4.  Add a product that does not exist (rejected, notified).
//!
//! Configuration comes from the environment (or a `.env` file), see
//! [`CartConfig`](cart_store::lifecycle::CartConfig). Without `CART_API_URL`
//! a small in-memory inventory is used.

use cart_store::cart_actor::CartContext;
use cart_store::lifecycle::{setup_tracing, CartConfig, CartStore};
use cart_store::model::{Product, ProductId};
use cart_store::notify::TracingNotifier;
use cart_store::services::{ApiClient, InMemoryInventory};
use cart_store::storage::FileStorage;
use tracing::{info, Instrument};

const SHOE: ProductId = ProductId(1);
const MISSING: ProductId = ProductId(99);

fn demo_inventory() -> InMemoryInventory {
    InMemoryInventory::new()
        .with_product(
            Product::new(1, "Tênis de Caminhada Leve Confortável", 100.0, "shoe-1.jpg"),
            5,
        )
        .with_product(
            Product::new(2, "Tênis VR Caminhada Confortável", 139.9, "shoe-2.jpg"),
            3,
        )
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting cart store");

    let context = match &config.api_url {
        Some(url) => {
            let api = ApiClient::new(url.as_str());
            CartContext::new(api.clone(), api)
        }
        None => {
            let inventory = demo_inventory();
            CartContext::new(inventory.clone(), inventory)
        }
    };
    let storage = FileStorage::new(config.storage_dir.clone());

    let store = CartStore::start(&config, storage, context, TracingNotifier)
        .map_err(|e| e.to_string())?;

    async {
        for _ in 0..2 {
            if let Ok(change) = store.add_item(SHOE).await {
                info!(?change, "Added");
            }
        }
        if let Err(e) = store.update_amount(SHOE, 10).await {
            info!(error = %e, "Update rejected");
        }
    }
    .instrument(tracing::info_span!("filling_cart"))
    .await;

    info!(lines = ?store.cart().lines(), "Cart");

    async {
        for _ in 0..2 {
            match store.remove_item(SHOE).await {
                Ok(change) => info!(?change, "Removed"),
                Err(e) => info!(error = %e, "Remove rejected"),
            }
        }
        if let Err(e) = store.add_item(MISSING).await {
            info!(error = %e, "Add rejected");
        }
    }
    .instrument(tracing::info_span!("emptying_cart"))
    .await;

    info!(lines = store.cart().len(), "Cart");

    store.shutdown().await?;

    info!("Session completed");
    Ok(())
}
