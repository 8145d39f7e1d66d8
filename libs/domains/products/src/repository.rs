use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Create a new product with a server-assigned ID
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace an existing product wholesale (PUT semantics)
    async fn replace(&self, id: &str, input: CreateProduct) -> ProductResult<Product>;

    /// Delete a product by ID; returns whether it existed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository.
///
/// Insertion-ordered `Vec` behind an `RwLock`; listing clones a snapshot.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a repository pre-populated with the given products,
    /// preserving their ids and order. Used for seed data and tests.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn replace(&self, id: &str, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        *slot = Product::with_id(id.to_string(), input);
        let replaced = slot.clone();

        tracing::info!(product_id = %id, "Replaced product");
        Ok(replaced)
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() < before {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimensiones;

    fn soporte_input() -> CreateProduct {
        CreateProduct {
            nombre: "Pieza de Soporte".to_string(),
            descripcion: "Soporte para impresión 3D".to_string(),
            precio_base: 15.99,
            dimensiones: Dimensiones {
                ancho: 10.0,
                alto: 5.0,
                profundo: 3.0,
            },
            categoria: "Soportes".to_string(),
            estado: "disponible".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(soporte_input()).await.unwrap();
        assert_eq!(product.nombre, "Pieza de Soporte");

        let fetched = repo.get_by_id(&product.id).await.unwrap();
        assert_eq!(fetched.unwrap().id, product.id);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryProductRepository::new();

        let mut input = soporte_input();
        let first = repo.create(input.clone()).await.unwrap();
        input.nombre = "Engranaje".to_string();
        let second = repo.create(input).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn test_replace_keeps_id() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(soporte_input()).await.unwrap();

        let mut input = soporte_input();
        input.precio_base = 12.50;
        let replaced = repo.replace(&product.id, input).await.unwrap();

        assert_eq!(replaced.id, product.id);
        assert_eq!(replaced.precio_base, 12.50);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_fails() {
        let repo = InMemoryProductRepository::new();
        let result = repo.replace("missing", soporte_input()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(soporte_input()).await.unwrap();

        assert!(repo.delete(&product.id).await.unwrap());
        assert!(!repo.delete(&product.id).await.unwrap());
    }
}
