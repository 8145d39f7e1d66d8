use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.nombre))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace a product wholesale (PUT semantics, no partial merge)
    #[instrument(skip(self, input))]
    pub async fn replace_product(&self, id: &str, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.replace(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
