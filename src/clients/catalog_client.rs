//! # Catalog Client
//!
//! The catalog store's public API. Wraps a `ResourceClient<Product>`; reads
//! fetch a snapshot from the actor and derive everything else locally.
use crate::catalog_actor::{ProductAction, ProductActionResult, ProductError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    category_filters, distinct_categories, filter_by_category, CategoryFilter, OrderSummary,
    Product, ProductCreate, ProductId,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl CatalogClient {
    /// Adds a product and returns it with its freshly assigned id.
    ///
    /// Payloads with a negative or non-finite price, or a rating outside
    /// `[0, 5]`, are rejected with [`ProductError::Validation`].
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!(?params, "add_product called");
        let product = self.inner.create(params).await.map_err(ProductError::from)?;
        info!(id = %product.id, "Product added");
        Ok(product)
    }

    /// Sets on-hand quantity.
    ///
    /// Quantities ≤ 0 are ignored and an unknown id is ignored; neither is an
    /// error. Returns the on-hand quantity afterwards, or `None` for an
    /// unknown id.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: ProductId,
        quantity: i64,
    ) -> Result<Option<u32>, ProductError> {
        debug!("Sending request");
        match self.stock_action(id, ProductAction::SetQuantity(quantity)).await? {
            Some(ProductActionResult::SetQuantity(level)) => Ok(Some(level)),
            Some(_) => unreachable!("SetQuantity action must return SetQuantity result"),
            None => Ok(None),
        }
    }

    /// Adds one unit of on-hand stock. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn increment_stock(&self, id: ProductId) -> Result<Option<u32>, ProductError> {
        self.adjust_stock(id, 1).await
    }

    /// Removes one unit of on-hand stock, but never the last one. Unknown ids
    /// are ignored.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: ProductId) -> Result<Option<u32>, ProductError> {
        self.adjust_stock(id, -1).await
    }

    async fn adjust_stock(&self, id: ProductId, step: i64) -> Result<Option<u32>, ProductError> {
        match self.stock_action(id, ProductAction::AdjustQuantity(step)).await? {
            Some(ProductActionResult::AdjustQuantity(level)) => Ok(Some(level)),
            Some(_) => unreachable!("AdjustQuantity action must return AdjustQuantity result"),
            None => Ok(None),
        }
    }

    /// Runs a stock action, treating an unknown product as a no-op.
    async fn stock_action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<Option<ProductActionResult>, ProductError> {
        match self.inner.perform_action(id, action).await {
            Ok(result) => Ok(Some(result)),
            Err(FrameworkError::NotFound(_)) => {
                debug!(%id, "Ignoring stock change for unknown product");
                Ok(None)
            }
            Err(e) => Err(ProductError::from(e)),
        }
    }

    /// Current on-hand quantity of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(ProductError::from)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            _ => unreachable!("CheckStock action must return CheckStock result"),
        }
    }

    /// Products in `category`, or all of them for `"all"`, in insertion order.
    #[instrument(skip(self, category))]
    pub async fn list_by_category(
        &self,
        category: impl Into<CategoryFilter>,
    ) -> Result<Vec<Product>, ProductError> {
        let filter = category.into();
        debug!(%filter, "Listing products");
        Ok(filter_by_category(self.list().await?, &filter))
    }

    /// Distinct categories of the current catalog, in first-seen order.
    pub async fn distinct_categories(&self) -> Result<Vec<String>, ProductError> {
        Ok(distinct_categories(&self.list().await?))
    }

    /// Category picker options, with `"all"` first.
    pub async fn category_filters(&self) -> Result<Vec<CategoryFilter>, ProductError> {
        Ok(category_filters(&self.list().await?))
    }

    /// Totals over on-hand stock: units, stock value, average unit price, tax.
    pub async fn inventory_summary(&self) -> Result<OrderSummary, ProductError> {
        let products = self.list().await?;
        Ok(OrderSummary::from_lines(
            products.iter().map(|p| (p.price, p.quantity)),
        ))
    }
}
