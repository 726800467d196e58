//! # Cart Client
//!
//! The cart store's public API, bound to one session cart. Mutations are cart
//! actions; every figure (counts, subtotal, tax, total, average) is derived
//! from a fresh snapshot on each call.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartItem, OrderSummary, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with one cart held by the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    /// Opens a new, empty cart and binds the client to it.
    #[instrument(skip(inner))]
    pub async fn open(inner: ResourceClient<Cart>) -> Result<Self, CartError> {
        let cart = inner.create(CartCreate).await.map_err(CartError::from)?;
        info!(cart_id = %cart.id, "Cart opened");
        Ok(Self {
            inner,
            cart_id: cart.id,
        })
    }

    /// Binds to a cart that was opened earlier.
    ///
    /// Nothing is checked here; if the cart does not exist every call fails
    /// with [`CartError::CartNotFound`].
    pub fn attach(inner: ResourceClient<Cart>, cart_id: CartId) -> Self {
        Self { inner, cart_id }
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Adds `quantity` units of a product snapshot, merging with an existing row.
    ///
    /// Returns the row's cart quantity afterwards. `quantity` must be at
    /// least 1.
    #[instrument(skip(self, product), fields(cart_id = %self.cart_id, product_id = %product.id))]
    pub async fn add_to_cart(&self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        debug!(quantity, "Sending request");
        let action = CartAction::Add {
            product: product.clone(),
            quantity,
        };
        match self.action(action).await? {
            CartActionResult::Add(cart_quantity) => Ok(cart_quantity),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    /// Removes the row for `id`. Returns whether anything was removed.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.action(CartAction::Remove(id)).await? {
            CartActionResult::Remove(removed) => Ok(removed),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    /// Sets the cart quantity for `id`; ≤ 0 removes the row.
    ///
    /// Returns the stored quantity, or `None` if the row was removed or was
    /// never in the cart.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn update_cart_quantity(
        &self,
        id: ProductId,
        quantity: i64,
    ) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self
            .action(CartAction::UpdateQuantity { id, quantity })
            .await?
        {
            CartActionResult::UpdateQuantity(stored) => Ok(stored),
            _ => unreachable!("UpdateQuantity action must return UpdateQuantity result"),
        }
    }

    async fn action(&self, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(self.cart_id, action)
            .await
            .map_err(CartError::from)
    }

    /// A snapshot of the bound cart.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        self.get(self.cart_id)
            .await?
            .ok_or_else(|| CartError::CartNotFound(self.cart_id.to_string()))
    }

    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.snapshot().await?.items().to_vec())
    }

    pub async fn is_empty(&self) -> Result<bool, CartError> {
        Ok(self.snapshot().await?.is_empty())
    }

    /// Number of distinct rows.
    pub async fn line_count(&self) -> Result<usize, CartError> {
        Ok(self.snapshot().await?.line_count())
    }

    pub async fn total_item_count(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_item_count())
    }

    pub async fn subtotal(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.subtotal())
    }

    pub async fn tax(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.tax())
    }

    pub async fn total(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.total())
    }

    pub async fn average_item_price(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.average_item_price())
    }

    /// All derived figures from a single snapshot.
    pub async fn summary(&self) -> Result<OrderSummary, CartError> {
        Ok(self.snapshot().await?.summary())
    }
}
