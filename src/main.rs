//! # Storefront demo
//!
//! Drives the catalog and cart the way a shop front-end would: browse by
//! category, adjust stock, add a product, fill the cart, then print the
//! snapshots as JSON.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --channel-capacity 8
//! STOREFRONT_SEED_CATALOG=false cargo run
//! ```

use clap::{ArgAction, Parser};
use storefront::lifecycle::{setup_tracing, Storefront, StorefrontConfig, DEFAULT_CHANNEL_CAPACITY};
use storefront::model::{CategoryFilter, ProductForm};
use tracing::{info, warn, Instrument};

#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", about = "In-memory catalog and cart demo", version)]
struct Cli {
    #[arg(
        long,
        env = "STOREFRONT_CHANNEL_CAPACITY",
        value_name = "N",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        help = "Mailbox size for each store actor"
    )]
    channel_capacity: usize,

    #[arg(
        long,
        env = "STOREFRONT_SEED_CATALOG",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Load the default products at start-up"
    )]
    seed_catalog: bool,

    #[arg(long, help = "Start with an empty catalog (same as --seed-catalog false)")]
    no_seed: bool,
}

impl From<Cli> for StorefrontConfig {
    fn from(cli: Cli) -> Self {
        Self {
            channel_capacity: cli.channel_capacity,
            seed_catalog: cli.seed_catalog && !cli.no_seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from(Cli::parse());
    info!(?config, "Starting storefront");

    let store = Storefront::launch(config).await?;

    let categories = store.catalog.category_filters().await?;
    info!(?categories, "Category filters");

    let span = tracing::info_span!("add_product_form");
    let form = ProductForm {
        name: "Standing Desk".to_string(),
        image: "/standing-desk.jpg".to_string(),
        price: "299.99".to_string(),
        quantity: "3".to_string(),
        category: "Other".to_string(),
        description: "Electric height-adjustable desk".to_string(),
        specifications: "Dual motor, 71-121 cm".to_string(),
        rating: "4.6".to_string(),
    };
    async {
        match form.validate() {
            Ok(params) => {
                let desk = store.catalog.add_product(params).await?;
                info!(id = %desk.id, low_stock = desk.is_low_stock(), "Desk listed");
            }
            Err(errors) => warn!(%errors, "Form rejected"),
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let products = store.catalog.list_by_category(CategoryFilter::All).await?;
    if let Some(first) = products.first() {
        store.catalog.increment_stock(first.id).await?;

        let span = tracing::info_span!("cart_session");
        async {
            store.cart.add_to_cart(first, 1).await?;
            store.cart.add_to_cart(first, 2).await?;
            if let Some(second) = products.get(1) {
                store.cart.add_to_cart(second, 1).await?;
                store.cart.update_cart_quantity(second.id, 0).await?;
            }
            Ok::<_, Box<dyn std::error::Error>>(())
        }
        .instrument(span)
        .await?;
    }

    let catalog = store.catalog.list_by_category(CategoryFilter::All).await?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    println!("{}", serde_json::to_string_pretty(&store.catalog.inventory_summary().await?)?);
    println!("{}", serde_json::to_string_pretty(&store.cart.items().await?)?);
    println!("{}", serde_json::to_string_pretty(&store.cart.summary().await?)?);

    store.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}
