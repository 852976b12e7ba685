use cart_store::cart_actor::{self, CartChange, CartContext, CartError};
use cart_store::framework::ActorClient;
use cart_store::model::{Product, ProductId, StockInfo};
use cart_store::services::mock::{MockCatalog, MockStock};
use cart_store::services::ServiceError;
use cart_store::storage::{MemoryStorage, Storage};

/// Integration test: Real Cart actor with mocked catalog and stock services.
///
/// Pattern 2: Actor + Mocks
/// - Real Cart actor (tests the add / update rules and the commit path)
/// - Mocked collaborators (scripted answers, verified call counts)
#[tokio::test]
async fn test_cart_actor_with_mocked_services() {
    let catalog = MockCatalog::new();
    let stock = MockStock::new();

    // New line: one catalog lookup, no stock lookup
    catalog
        .expect_get(ProductId(1))
        .return_ok(Product::new(1, "Shoe", 100.0, "shoe.jpg"));
    // Existing line: one stock lookup per increment
    stock.expect_get(ProductId(1)).return_ok(StockInfo::new(1, 2));
    stock.expect_get(ProductId(1)).return_ok(StockInfo::new(1, 2));

    let storage = MemoryStorage::new();
    let (cart_actor, cart_client) =
        cart_actor::new(8, storage.clone(), "@Test").expect("Failed to create actor");
    let actor_handle = tokio::spawn(
        cart_actor.run(CartContext::new(catalog.clone(), stock.clone())),
    );

    assert_eq!(
        cart_client.add_item(ProductId(1)).await,
        Ok(CartChange::Added(ProductId(1)))
    );
    assert_eq!(
        cart_client.add_item(ProductId(1)).await,
        Ok(CartChange::AmountChanged {
            product_id: ProductId(1),
            from: 1,
            to: 2
        })
    );
    assert!(matches!(
        cart_client.add_item(ProductId(1)).await,
        Err(CartError::StockExceeded { requested: 3, available: 2, .. })
    ));

    assert_eq!(cart_client.snapshot().amount_of(ProductId(1)), Some(2));
    let raw = storage.get("@Test:cart").unwrap().expect("Cart not persisted");
    assert!(raw.contains(r#""amount":2"#));

    catalog.verify();
    stock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_stock_service_outage_is_reported() {
    let catalog = MockCatalog::new();
    let stock = MockStock::new();
    catalog
        .expect_get(ProductId(5))
        .return_ok(Product::new(5, "Sandal", 40.0, "sandal.jpg"));
    stock
        .expect_get(ProductId(5))
        .return_err(ServiceError::Unavailable("connection refused".into()));

    let (cart_actor, cart_client) = cart_actor::new(8, MemoryStorage::new(), "@Test").unwrap();
    let actor_handle = tokio::spawn(
        cart_actor.run(CartContext::new(catalog.clone(), stock.clone())),
    );

    cart_client.add_item(ProductId(5)).await.unwrap();
    let err = cart_client.update_amount(ProductId(5), 2).await.unwrap_err();

    assert_eq!(
        err,
        CartError::StockLookupFailed {
            product_id: ProductId(5),
            source: ServiceError::Unavailable("connection refused".into())
        }
    );
    assert_eq!(cart_client.snapshot().amount_of(ProductId(5)), Some(1));
    stock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}
