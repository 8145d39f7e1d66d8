use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{MaterialError, MaterialResult};
use crate::models::{CreateMaterial, Material};
use crate::repository::MaterialRepository;

/// Service layer for the material catalog and its stock ledger.
///
/// Catalog operations are thin validation wrappers over the repository.
/// The ledger operations (`get_stock`, `set_stock`, `is_available`)
/// implement the inventory contract: stock is overwritten, never
/// adjusted by delta, and availability is always derived from the
/// current quantity rather than the stored advisory flag.
#[derive(Clone)]
pub struct MaterialService<R: MaterialRepository> {
    repository: Arc<R>,
}

impl<R: MaterialRepository> MaterialService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all materials in insertion order
    #[instrument(skip(self))]
    pub async fn list_materials(&self) -> MaterialResult<Vec<Material>> {
        self.repository.list().await
    }

    /// List materials of the given type.
    ///
    /// The type is matched as an opaque string; an unknown value is not
    /// an error, it simply matches nothing.
    #[instrument(skip(self))]
    pub async fn list_by_type(&self, tipo: &str) -> MaterialResult<Vec<Material>> {
        let materials = self.repository.list().await?;
        Ok(materials
            .into_iter()
            .filter(|m| m.tipo.to_string() == tipo)
            .collect())
    }

    /// Get a material by ID
    #[instrument(skip(self))]
    pub async fn get_material(&self, id: &str) -> MaterialResult<Material> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| MaterialError::NotFound(id.to_string()))
    }

    /// Create a new material
    #[instrument(skip(self, input), fields(material_name = %input.nombre))]
    pub async fn create_material(&self, input: CreateMaterial) -> MaterialResult<Material> {
        input
            .validate()
            .map_err(|e| MaterialError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace a material wholesale (PUT semantics, no partial merge)
    #[instrument(skip(self, input))]
    pub async fn replace_material(
        &self,
        id: &str,
        input: CreateMaterial,
    ) -> MaterialResult<Material> {
        input
            .validate()
            .map_err(|e| MaterialError::Validation(e.to_string()))?;

        self.repository.replace(id, input).await
    }

    /// Delete a material
    #[instrument(skip(self))]
    pub async fn delete_material(&self, id: &str) -> MaterialResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(MaterialError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Current stock quantity of a material
    #[instrument(skip(self))]
    pub async fn get_stock(&self, id: &str) -> MaterialResult<f64> {
        Ok(self.get_material(id).await?.stock)
    }

    /// Overwrite the stock quantity of a material.
    ///
    /// Rejects negative quantities with `InvalidQuantity`, leaving the
    /// stored value untouched. The write is a full overwrite of the
    /// quantity; previous values are not retained anywhere.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: &str, stock: f64) -> MaterialResult<Material> {
        if stock < 0.0 {
            return Err(MaterialError::InvalidQuantity(stock));
        }

        self.repository
            .update_stock(id, stock)
            .await?
            .ok_or_else(|| MaterialError::NotFound(id.to_string()))
    }

    /// Derived availability: `stock > 0`, independent of the stored
    /// `disponible` flag.
    #[instrument(skip(self))]
    pub async fn is_available(&self, id: &str) -> MaterialResult<bool> {
        Ok(self.get_material(id).await?.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Caracteristicas, MaterialType};
    use crate::repository::MockMaterialRepository;

    fn m001(stock: f64, disponible: bool) -> Material {
        Material {
            id: "m001".to_string(),
            nombre: "PLA Premium".to_string(),
            tipo: MaterialType::Filamento,
            fabricante: "XYZ Filaments".to_string(),
            disponible,
            stock,
            precio_por_unidad: 25.99,
            caracteristicas: Caracteristicas::default(),
        }
    }

    #[tokio::test]
    async fn test_set_stock_rejects_negative_without_touching_storage() {
        // No expectation on update_stock: a negative quantity must fail
        // before reaching the repository.
        let mock_repo = MockMaterialRepository::new();
        let service = MaterialService::new(mock_repo);

        let result = service.set_stock("m001", -5.0).await;
        assert!(matches!(result, Err(MaterialError::InvalidQuantity(q)) if q == -5.0));
    }

    #[tokio::test]
    async fn test_set_stock_zero_is_allowed() {
        let mut mock_repo = MockMaterialRepository::new();
        mock_repo
            .expect_update_stock()
            .withf(|id, stock| id == "m001" && *stock == 0.0)
            .returning(|_, stock| Ok(Some(m001(stock, true))));

        let service = MaterialService::new(mock_repo);
        let material = service.set_stock("m001", 0.0).await.unwrap();
        assert_eq!(material.stock, 0.0);
    }

    #[tokio::test]
    async fn test_set_stock_unknown_material() {
        let mut mock_repo = MockMaterialRepository::new();
        mock_repo.expect_update_stock().returning(|_, _| Ok(None));

        let service = MaterialService::new(mock_repo);
        let result = service.set_stock("m999", 10.0).await;
        assert!(matches!(result, Err(MaterialError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_is_available_tracks_stock_not_flag() {
        let mut mock_repo = MockMaterialRepository::new();
        // disponible=false but stock positive: still available
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(m001(1000.0, false))));

        let service = MaterialService::new(mock_repo);
        assert!(service.is_available("m001").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_available_false_at_zero_stock_despite_flag() {
        let mut mock_repo = MockMaterialRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(m001(0.0, true))));

        let service = MaterialService::new(mock_repo);
        assert!(!service.is_available("m001").await.unwrap());
    }

    #[tokio::test]
    async fn test_availability_flips_after_stock_overwrite() {
        let repo = crate::repository::InMemoryMaterialRepository::with_materials(vec![m001(
            1000.0, true,
        )]);
        let service = MaterialService::new(repo);

        assert!(service.is_available("m001").await.unwrap());

        service.set_stock("m001", 0.0).await.unwrap();
        assert!(!service.is_available("m001").await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_set_stock_leaves_quantity_unchanged() {
        let repo = crate::repository::InMemoryMaterialRepository::with_materials(vec![m001(
            1000.0, true,
        )]);
        let service = MaterialService::new(repo);

        let result = service.set_stock("m001", -1.0).await;
        assert!(result.is_err());
        assert_eq!(service.get_stock("m001").await.unwrap(), 1000.0);
    }

    #[tokio::test]
    async fn test_list_by_type_unknown_type_matches_nothing() {
        let repo = crate::repository::InMemoryMaterialRepository::with_materials(vec![m001(
            1000.0, true,
        )]);
        let service = MaterialService::new(repo);

        let result = service.list_by_type("madera").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_type_matches_filament() {
        let repo = crate::repository::InMemoryMaterialRepository::with_materials(vec![m001(
            1000.0, true,
        )]);
        let service = MaterialService::new(repo);

        let result = service.list_by_type("filamento").await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "m001");
    }

    #[tokio::test]
    async fn test_create_material_validates_name() {
        let mock_repo = MockMaterialRepository::new();
        let service = MaterialService::new(mock_repo);

        let input = CreateMaterial {
            nombre: String::new(),
            tipo: MaterialType::Filamento,
            fabricante: String::new(),
            disponible: true,
            stock: 10.0,
            precio_por_unidad: 5.0,
            caracteristicas: Caracteristicas::default(),
        };

        let result = service.create_material(input).await;
        assert!(matches!(result, Err(MaterialError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_material_rejects_negative_stock() {
        let mock_repo = MockMaterialRepository::new();
        let service = MaterialService::new(mock_repo);

        let input = CreateMaterial {
            nombre: "PLA".to_string(),
            tipo: MaterialType::Filamento,
            fabricante: String::new(),
            disponible: true,
            stock: -10.0,
            precio_por_unidad: 5.0,
            caracteristicas: Caracteristicas::default(),
        };

        let result = service.create_material(input).await;
        assert!(matches!(result, Err(MaterialError::Validation(_))));
    }
}
