use cart_store::cart_actor::CartError;
use cart_store::config::CartConfig;
use cart_store::lifecycle::CartSystem;
use cart_store::mock::RecordingNotifier;
use cart_store::model::{Cart, Product, ProductId};
use cart_store::services::{FileStore, MemoryStore, PersistentStore};
use std::sync::Arc;

/// Integration test: the full system, cart actor wired to the catalog actor.
///
/// Pattern 3: Full System
/// - Real Cart and Catalog actors
/// - In-memory storage inspected directly
struct Shop {
    system: CartSystem,
    storage: MemoryStore,
    notifier: RecordingNotifier,
    config: CartConfig,
}

impl Shop {
    async fn open(storage: MemoryStore) -> Self {
        let config = CartConfig::default();
        let notifier = RecordingNotifier::new();
        let system = CartSystem::new(
            &config,
            Arc::new(storage.clone()),
            Arc::new(notifier.clone()),
        );
        Self {
            system,
            storage,
            notifier,
            config,
        }
    }

    async fn list(&self, id: u32, stock: u32) {
        let product = Product::new(id, format!("Shoe {id}"), 100.0 + id as f64, format!("{id}.jpg"));
        self.system
            .catalog_client
            .insert_product(product, stock)
            .await
            .unwrap();
    }

    fn stored(&self) -> Option<Cart> {
        self.storage
            .get(&self.config.storage_key)
            .map(|raw| Cart::from_json(&raw).unwrap())
    }

    async fn committed(&self) -> Arc<Cart> {
        self.system.cart_client.cart().await.unwrap()
    }
}

fn quantities(cart: &Cart) -> Vec<(u32, u32)> {
    cart.entries()
        .iter()
        .map(|e| (e.product_id.0, e.quantity))
        .collect()
}

#[tokio::test]
async fn test_add_to_empty_cart() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 5).await;

    let cart = shop.system.cart_client.add_product(ProductId(10)).await.unwrap();

    assert_eq!(quantities(&cart), vec![(10, 1)]);
    let entry = cart.get(ProductId(10)).unwrap();
    assert_eq!(entry.display.title, "Shoe 10");
    assert_eq!(entry.display.price, 110.0);
    assert_eq!(shop.stored().as_ref(), Some(cart.as_ref()));
    shop.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_beyond_stock_leaves_cart_unchanged() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 1).await;
    let client = &shop.system.cart_client;

    client.add_product(ProductId(10)).await.unwrap();
    let stored_before = shop.stored();

    let result = client.add_product(ProductId(10)).await;

    assert!(matches!(result, Err(CartError::OutOfStock { .. })));
    assert_eq!(quantities(&*shop.committed().await), vec![(10, 1)]);
    assert_eq!(shop.stored(), stored_before);
    assert_eq!(
        shop.notifier.messages(),
        vec!["Requested quantity is out of stock"]
    );
}

#[tokio::test]
async fn test_update_to_zero_is_rejected() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 5).await;
    let client = &shop.system.cart_client;
    client.add_product(ProductId(10)).await.unwrap();
    client.add_product(ProductId(10)).await.unwrap();

    let result = client.update_product_amount(ProductId(10), 0).await;

    assert!(matches!(result, Err(CartError::InvalidAmount { .. })));
    assert_eq!(quantities(&*shop.committed().await), vec![(10, 2)]);
    assert_eq!(shop.stored().map(|c| quantities(&c)), Some(vec![(10, 2)]));
}

#[tokio::test]
async fn test_remove_keeps_other_entries_in_order() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 5).await;
    shop.list(20, 5).await;
    let client = &shop.system.cart_client;
    client.add_product(ProductId(10)).await.unwrap();
    client.add_product(ProductId(10)).await.unwrap();
    client.add_product(ProductId(20)).await.unwrap();

    let cart = client.remove_product(ProductId(10)).await.unwrap();

    assert_eq!(quantities(&cart), vec![(20, 1)]);
    assert_eq!(shop.stored().as_ref(), Some(cart.as_ref()));
}

#[tokio::test]
async fn test_remove_absent_product_fails() {
    let shop = Shop::open(MemoryStore::new()).await;

    let result = shop.system.cart_client.remove_product(ProductId(99)).await;

    assert!(matches!(result, Err(CartError::NotFoundInCart(ProductId(99)))));
    assert!(shop.committed().await.is_empty());
    assert_eq!(shop.stored(), None);
    assert_eq!(shop.notifier.messages(), vec!["Error removing product"]);
}

#[tokio::test]
async fn test_update_amount_is_persisted() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 5).await;
    let client = &shop.system.cart_client;
    client.add_product(ProductId(10)).await.unwrap();
    client.add_product(ProductId(10)).await.unwrap();

    let cart = client.update_product_amount(ProductId(10), 4).await.unwrap();

    assert_eq!(quantities(&cart), vec![(10, 4)]);
    assert_eq!(shop.stored().map(|c| quantities(&c)), Some(vec![(10, 4)]));
}

#[tokio::test]
async fn test_stock_is_read_fresh_for_every_operation() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 5).await;
    let client = &shop.system.cart_client;
    client.update_product_amount(ProductId(10), 1).await.unwrap_err();
    client.add_product(ProductId(10)).await.unwrap();
    client.update_product_amount(ProductId(10), 3).await.unwrap();

    shop.system
        .catalog_client
        .set_stock(ProductId(10), 3)
        .await
        .unwrap();

    let result = client.add_product(ProductId(10)).await;
    assert!(matches!(result, Err(CartError::OutOfStock { available: 3, .. })));
    assert_eq!(
        shop.notifier.messages(),
        vec!["Error updating product amount", "Requested quantity is out of stock"]
    );
}

#[tokio::test]
async fn test_unknown_product_is_not_added() {
    let shop = Shop::open(MemoryStore::new()).await;

    let result = shop.system.cart_client.add_product(ProductId(404)).await;

    assert!(matches!(result, Err(CartError::Lookup(_))));
    assert!(shop.committed().await.is_empty());
    assert_eq!(shop.notifier.messages(), vec!["Error adding product"]);
}

#[tokio::test]
async fn test_concurrent_adds_never_exceed_stock() {
    let shop = Shop::open(MemoryStore::new()).await;
    shop.list(10, 3).await;

    let attempts: Vec<_> = (0..10)
        .map(|_| {
            let client = shop.system.cart_client.clone();
            tokio::spawn(async move { client.add_product(ProductId(10)).await })
        })
        .collect();

    let mut accepted = 0;
    for attempt in attempts {
        if attempt.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 3);
    let cart = shop.committed().await;
    assert_eq!(quantities(&cart), vec![(10, 3)]);
    assert_eq!(shop.stored().as_ref(), Some(cart.as_ref()));
    assert_eq!(shop.notifier.messages().len(), 7);
}

#[tokio::test]
async fn test_cart_survives_reload() {
    let storage = MemoryStore::new();

    let shop = Shop::open(storage.clone()).await;
    shop.list(10, 5).await;
    shop.list(20, 5).await;
    shop.system.cart_client.add_product(ProductId(20)).await.unwrap();
    shop.system.cart_client.add_product(ProductId(10)).await.unwrap();
    let before = shop.committed().await;
    shop.system.shutdown().await.unwrap();

    let reloaded = Shop::open(storage).await;

    assert_eq!(reloaded.committed().await.as_ref(), before.as_ref());
    assert_eq!(quantities(&before), vec![(20, 1), (10, 1)]);
}

#[tokio::test]
async fn test_legacy_stored_cart_is_hydrated() {
    let storage = MemoryStore::new();
    storage.insert(
        "@RocketShoes:cart",
        r#"[{"id":10,"title":"Shoe 10","price":110.0,"image":"10.jpg","amount":2}]"#,
    );

    let shop = Shop::open(storage).await;
    shop.list(10, 5).await;

    assert_eq!(quantities(&*shop.committed().await), vec![(10, 2)]);

    // The next commit rewrites the value in the current format.
    shop.system.cart_client.add_product(ProductId(10)).await.unwrap();
    let raw = shop.storage.get("@RocketShoes:cart").unwrap();
    assert!(raw.contains(r#""productId":10"#));
    assert!(raw.contains(r#""quantity":3"#));
}

#[tokio::test]
async fn test_file_store_persists_across_systems() {
    let dir = tempfile::tempdir().unwrap();
    let config = CartConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..CartConfig::default()
    };

    let open = |config: &CartConfig| {
        let data_dir = config.data_dir.clone().expect("data_dir is set");
        let storage: Arc<dyn PersistentStore> = Arc::new(FileStore::new(data_dir));
        CartSystem::new(config, storage, Arc::new(RecordingNotifier::new()))
    };

    let system = open(&config);
    system
        .catalog_client
        .insert_product(Product::new(7, "Loafer", 149.0, "loafer.jpg"), 2)
        .await
        .unwrap();
    system.cart_client.add_product(ProductId(7)).await.unwrap();
    system.cart_client.add_product(ProductId(7)).await.unwrap();
    system.shutdown().await.unwrap();
    assert!(dir.path().join("_RocketShoes_cart.json").exists());

    let system = open(&config);
    let cart = system.cart_client.cart().await.unwrap();
    assert_eq!(quantities(&cart), vec![(7, 2)]);
    system.shutdown().await.unwrap();
}
