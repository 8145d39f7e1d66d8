use std::sync::Arc;
use tracing::instrument;

use domain_materials::{Material, MaterialRepository};
use domain_products::{Product, ProductRepository};

use crate::compiler::compile;
use crate::error::{SearchError, SearchResult};
use crate::executor::execute;
use crate::models::FilterRequest;
use crate::schema::{MATERIAL_SCHEMA, PRODUCT_SCHEMA};

/// Search service: compiles a filter request, snapshots the target
/// catalog through its repository, and runs the executor over the
/// snapshot.
#[derive(Clone)]
pub struct SearchService<M: MaterialRepository, P: ProductRepository> {
    materials: Arc<M>,
    products: Arc<P>,
}

impl<M: MaterialRepository, P: ProductRepository> SearchService<M, P> {
    pub fn new(materials: Arc<M>, products: Arc<P>) -> Self {
        Self {
            materials,
            products,
        }
    }

    /// Filter the product catalog. Order of the stored catalog is kept.
    #[instrument(skip(self, request))]
    pub async fn search_products(&self, request: FilterRequest) -> SearchResult<Vec<Product>> {
        let filter = compile(&request, PRODUCT_SCHEMA)?;

        let candidates = self
            .products
            .list()
            .await
            .map_err(|e| SearchError::Storage(e.to_string()))?;

        Ok(execute(&filter, &candidates))
    }

    /// Filter the material catalog. Materials with exhausted stock are
    /// excluded regardless of the request.
    #[instrument(skip(self, request))]
    pub async fn search_materials(&self, request: FilterRequest) -> SearchResult<Vec<Material>> {
        let filter = compile(&request, MATERIAL_SCHEMA)?;

        let candidates = self
            .materials
            .list()
            .await
            .map_err(|e| SearchError::Storage(e.to_string()))?;

        Ok(execute(&filter, &candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_materials::{Caracteristicas, InMemoryMaterialRepository, MaterialType};
    use domain_products::{Dimensiones, InMemoryProductRepository};

    fn seeded_service(
    ) -> SearchService<InMemoryMaterialRepository, InMemoryProductRepository> {
        let materials = InMemoryMaterialRepository::with_materials(vec![
            Material {
                id: "m001".to_string(),
                nombre: "PLA Premium".to_string(),
                tipo: MaterialType::Filamento,
                fabricante: "XYZ Filaments".to_string(),
                disponible: true,
                stock: 1000.0,
                precio_por_unidad: 25.99,
                caracteristicas: Caracteristicas::default(),
            },
            Material {
                id: "m002".to_string(),
                nombre: "Resina Standard".to_string(),
                tipo: MaterialType::Resina,
                fabricante: "UV Resins".to_string(),
                disponible: true,
                stock: 0.0,
                precio_por_unidad: 45.99,
                caracteristicas: Caracteristicas::default(),
            },
        ]);

        let products = InMemoryProductRepository::with_products(vec![
            Product {
                id: "p001".to_string(),
                nombre: "Pieza de Soporte".to_string(),
                descripcion: String::new(),
                precio_base: 15.99,
                dimensiones: Dimensiones {
                    ancho: 10.0,
                    alto: 5.0,
                    profundo: 3.0,
                },
                categoria: "Soportes".to_string(),
                estado: "disponible".to_string(),
            },
            Product {
                id: "p002".to_string(),
                nombre: "Engranaje Helicoidal".to_string(),
                descripcion: String::new(),
                precio_base: 25.0,
                dimensiones: Dimensiones {
                    ancho: 8.0,
                    alto: 8.0,
                    profundo: 2.0,
                },
                categoria: "Mecánica".to_string(),
                estado: "disponible".to_string(),
            },
        ]);

        SearchService::new(Arc::new(materials), Arc::new(products))
    }

    #[tokio::test]
    async fn test_unconstrained_product_search_returns_catalog_order() {
        let service = seeded_service();

        let result = service
            .search_products(FilterRequest::default())
            .await
            .unwrap();
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p001", "p002"]);
    }

    #[tokio::test]
    async fn test_price_cap_filters_products() {
        let service = seeded_service();

        let result = service
            .search_products(FilterRequest {
                precio_max: Some(20.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p001");
    }

    #[tokio::test]
    async fn test_invalid_range_aborts_search() {
        let service = seeded_service();

        let result = service
            .search_products(FilterRequest {
                precio_min: Some(30.0),
                precio_max: Some(20.0),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(SearchError::InvalidRange { .. })));
    }

    #[tokio::test]
    async fn test_material_search_excludes_exhausted_stock() {
        let service = seeded_service();

        let result = service
            .search_materials(FilterRequest::default())
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "m001");
    }

    #[tokio::test]
    async fn test_material_type_filter() {
        let service = seeded_service();

        // m002 is the only resin but it is out of stock
        let result = service
            .search_materials(FilterRequest {
                tipo_material: Some("resina".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(result.is_empty());
    }
}
