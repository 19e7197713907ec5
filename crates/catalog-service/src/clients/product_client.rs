//! # Product Client
//!
//! Provides the high‑level API the HTTP handlers use to reach the product store.
//! It wraps a `ResourceClient<Product>` and exposes catalog-specific methods.
use crate::model::{PageParams, Pagination, Product, ProductFields, ProductFilter, ProductId, ProductPage};
use crate::product_actor::ProductError;
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::StoreError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Inserts a product and returns it with its assigned ID.
    #[instrument(skip(self))]
    pub async fn create_product(&self, fields: ProductFields) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(fields).await.map_err(Self::map_error)
    }

    /// Replaces every business field of an existing product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, fields).await.map_err(Self::map_error)
    }

    /// One page of products selected by `filter`, ordered by name, with its metadata.
    ///
    /// The total is counted first and the page fetched second, as two separate store
    /// requests. Either failing fails the whole listing.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        filter: ProductFilter,
        params: PageParams,
    ) -> Result<ProductPage, ProductError> {
        debug!("Sending request");
        let total = self.count(filter.clone()).await?;
        let data = self
            .inner
            .find_many(filter, params.window())
            .await
            .map_err(Self::map_error)?;
        Ok(ProductPage {
            data,
            pagination: Pagination::new(total, params),
        })
    }
}
