use crate::catalog_actor::seed::default_products;
use crate::clients::{CartClient, CatalogClient};
use crate::lifecycle::{StorefrontConfig, StorefrontError};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Owns the catalog and cart actors for one storefront session.
///
/// `Storefront` is the only place the stores are created. It:
/// - spawns one catalog actor and one cart actor, each in its own Tokio task
/// - seeds the catalog with [`default_products`] when configured
/// - opens the session cart and binds [`CartClient`] to it
/// - joins both tasks on [`shutdown`](Storefront::shutdown)
///
/// # Example
///
/// ```rust
/// use storefront::lifecycle::{Storefront, StorefrontConfig};
/// use storefront::model::CategoryFilter;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = Storefront::launch(StorefrontConfig::default()).await?;
///
///     let products = store.catalog.list_by_category(CategoryFilter::All).await?;
///     store.cart.add_to_cart(&products[0], 2).await?;
///     assert_eq!(store.cart.total_item_count().await?, 2);
///
///     store.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Storefront {
    /// Client for the product catalog.
    pub catalog: CatalogClient,

    /// Client bound to this session's cart.
    pub cart: CartClient,

    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Spawns both stores and returns once the catalog is seeded and the cart is open.
    #[instrument(name = "storefront_launch", skip(config), fields(seed = config.seed_catalog))]
    pub async fn launch(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let capacity = config.effective_capacity();

        let (catalog_actor, catalog_client) = crate::catalog_actor::new(capacity);
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);

        let handles = vec![
            tokio::spawn(catalog_actor.run()),
            tokio::spawn(cart_actor.run()),
        ];

        let catalog = CatalogClient::new(catalog_client);
        if config.seed_catalog {
            for product in default_products() {
                catalog.add_product(product).await?;
            }
        }

        let cart = CartClient::open(cart_client).await?;

        info!(channel_capacity = capacity, "Storefront ready");
        Ok(Self {
            catalog,
            cart,
            handles,
        })
    }

    /// Drops both clients and waits for the actors to drain.
    ///
    /// Clones handed out earlier keep their actor alive, so drop those first
    /// or this waits for them.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        drop(self.catalog);
        drop(self.cart);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StorefrontError::ActorPanicked(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
