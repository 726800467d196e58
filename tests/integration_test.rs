use std::collections::HashSet;

use storefront::clients::actor_client::ActorClient;
use storefront::lifecycle::{Storefront, StorefrontConfig};
use storefront::model::{CartState, CategoryFilter, Product, ProductCreate, ProductId};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

async fn headphones(store: &Storefront) -> Product {
    store
        .catalog
        .get(ProductId(1))
        .await
        .expect("Failed to get product")
        .expect("Product not found")
}

/// Full end-to-end run over a seeded storefront with real actors.
#[tokio::test]
async fn test_full_storefront_integration() {
    let store = Storefront::launch(StorefrontConfig::default())
        .await
        .expect("Failed to launch storefront");

    let product = headphones(&store).await;
    assert_eq!(product.name, "Wireless Headphones");
    assert_eq!(product.price, 79.99);
    assert_eq!(product.quantity, 8);

    assert_eq!(store.cart.add_to_cart(&product, 1).await.unwrap(), 1);
    assert_eq!(store.cart.add_to_cart(&product, 2).await.unwrap(), 3);

    let items = store.cart.items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), ProductId(1));
    assert_eq!(items[0].cart_quantity, 3);

    assert_eq!(store.cart.total_item_count().await.unwrap(), 3);
    assert!(close(store.cart.subtotal().await.unwrap(), 239.97));
    assert!(close(store.cart.tax().await.unwrap(), 23.997));
    assert!(close(store.cart.total().await.unwrap(), 263.967));
    assert!(close(store.cart.average_item_price().await.unwrap(), 79.99));

    // Cart quantity is independent of on-hand stock.
    assert_eq!(store.catalog.check_stock(ProductId(1)).await.unwrap(), 8);

    store.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_added_product_gets_fresh_id() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();

    let before: HashSet<ProductId> = store
        .catalog
        .list_by_category("all")
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();

    let created = store
        .catalog
        .add_product(ProductCreate {
            name: "X".to_string(),
            image: "/x.png".to_string(),
            price: 10.0,
            quantity: 0,
            category: "Other".to_string(),
            description: "x".to_string(),
            specifications: "x".to_string(),
            rating: 5.0,
        })
        .await
        .unwrap();
    assert!(!before.contains(&created.id));

    let all = store.catalog.list_by_category(CategoryFilter::All).await.unwrap();
    assert_eq!(all.len(), before.len() + 1);
    assert_eq!(all.last().map(|p| p.id), Some(created.id));
    assert_eq!(
        all.iter().map(|p| p.id).collect::<HashSet<_>>().len(),
        all.len()
    );

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_categories_follow_catalog() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();

    assert_eq!(
        store.catalog.distinct_categories().await.unwrap(),
        vec!["Electronics", "Appliances", "Lighting", "Accessories"]
    );

    let electronics = store.catalog.list_by_category("Electronics").await.unwrap();
    let names: Vec<_> = electronics.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Wireless Headphones", "Mechanical Keyboard"]);

    assert!(store.catalog.list_by_category("electronics").await.unwrap().is_empty());

    let filters = store.catalog.category_filters().await.unwrap();
    assert_eq!(filters.first(), Some(&CategoryFilter::All));
    assert_eq!(filters.len(), 5);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_adjustments() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();
    let id = ProductId(1);

    assert_eq!(store.catalog.set_quantity(id, 0).await.unwrap(), Some(8));
    assert_eq!(store.catalog.set_quantity(id, -1).await.unwrap(), Some(8));
    assert_eq!(store.catalog.check_stock(id).await.unwrap(), 8);

    assert_eq!(store.catalog.set_quantity(id, 1).await.unwrap(), Some(1));
    assert_eq!(store.catalog.decrement_stock(id).await.unwrap(), Some(1));
    assert_eq!(store.catalog.increment_stock(id).await.unwrap(), Some(2));

    assert_eq!(store.catalog.set_quantity(ProductId(999), 4).await.unwrap(), None);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_snapshot_is_not_live() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();
    let product = headphones(&store).await;

    store.cart.add_to_cart(&product, 1).await.unwrap();
    store.catalog.set_quantity(product.id, 20).await.unwrap();

    let items = store.cart.items().await.unwrap();
    assert_eq!(items[0].product.quantity, 8);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_remove_match() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();
    let products = store.catalog.list().await.unwrap();

    for product in &products[..3] {
        store.cart.add_to_cart(product, 2).await.unwrap();
    }

    assert_eq!(store.cart.update_cart_quantity(products[0].id, 0).await.unwrap(), None);
    assert_eq!(store.cart.update_cart_quantity(products[1].id, -5).await.unwrap(), None);
    assert!(store.cart.remove_from_cart(products[2].id).await.unwrap());

    assert!(store.cart.is_empty().await.unwrap());
    assert_eq!(store.cart.snapshot().await.unwrap().state(), CartState::Empty);

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_edge_cases() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();

    assert!(!store.cart.remove_from_cart(ProductId(42)).await.unwrap());
    assert_eq!(store.cart.update_cart_quantity(ProductId(42), 3).await.unwrap(), None);

    let summary = store.cart.summary().await.unwrap();
    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.subtotal, 0.0);
    assert_eq!(summary.tax, 0.0);
    assert_eq!(summary.total, 0.0);
    assert_eq!(summary.average_price, 0.0);

    store.shutdown().await.unwrap();
}

/// Clones of a client share one actor; concurrent adds are all applied.
#[tokio::test]
async fn test_concurrent_adds_through_clones() {
    let store = Storefront::launch(StorefrontConfig::default()).await.unwrap();
    let product = headphones(&store).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let cart = store.cart.clone();
        let product = product.clone();
        tasks.push(tokio::spawn(async move { cart.add_to_cart(&product, 1).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.cart.line_count().await.unwrap(), 1);
    assert_eq!(store.cart.total_item_count().await.unwrap(), 10);

    store.shutdown().await.unwrap();
}
