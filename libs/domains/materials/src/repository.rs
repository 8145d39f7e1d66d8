use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{MaterialError, MaterialResult};
use crate::models::{CreateMaterial, Material};

/// Repository trait for Material persistence.
///
/// The stock update is the only partial mutation; everything else is
/// create / full-record replace / delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// List all materials in insertion order
    async fn list(&self) -> MaterialResult<Vec<Material>>;

    /// Get a material by ID
    async fn get_by_id(&self, id: &str) -> MaterialResult<Option<Material>>;

    /// Create a new material with a server-assigned ID
    async fn create(&self, input: CreateMaterial) -> MaterialResult<Material>;

    /// Replace an existing material wholesale (PUT semantics)
    async fn replace(&self, id: &str, input: CreateMaterial) -> MaterialResult<Material>;

    /// Delete a material by ID; returns whether it existed
    async fn delete(&self, id: &str) -> MaterialResult<bool>;

    /// Overwrite the stock quantity of a material atomically.
    ///
    /// Returns the updated material, or `None` when the ID is unknown.
    /// Callers are responsible for rejecting negative quantities before
    /// this point; the write itself is a plain overwrite.
    async fn update_stock(&self, id: &str, stock: f64) -> MaterialResult<Option<Material>>;
}

/// In-memory implementation of MaterialRepository.
///
/// Backed by an insertion-ordered `Vec` behind an `RwLock`: reads take a
/// snapshot, writers serialize through the write lock, so concurrent
/// readers never observe a partially applied stock update.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMaterialRepository {
    materials: Arc<RwLock<Vec<Material>>>,
}

impl InMemoryMaterialRepository {
    pub fn new() -> Self {
        Self {
            materials: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a repository pre-populated with the given materials,
    /// preserving their ids and order. Used for seed data and tests.
    pub fn with_materials(materials: Vec<Material>) -> Self {
        Self {
            materials: Arc::new(RwLock::new(materials)),
        }
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn list(&self) -> MaterialResult<Vec<Material>> {
        let materials = self.materials.read().await;
        Ok(materials.clone())
    }

    async fn get_by_id(&self, id: &str) -> MaterialResult<Option<Material>> {
        let materials = self.materials.read().await;
        Ok(materials.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, input: CreateMaterial) -> MaterialResult<Material> {
        let mut materials = self.materials.write().await;

        let material = Material::new(input);
        materials.push(material.clone());

        tracing::info!(material_id = %material.id, "Created material");
        Ok(material)
    }

    async fn replace(&self, id: &str, input: CreateMaterial) -> MaterialResult<Material> {
        let mut materials = self.materials.write().await;

        let slot = materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| MaterialError::NotFound(id.to_string()))?;

        *slot = Material::with_id(id.to_string(), input);
        let replaced = slot.clone();

        tracing::info!(material_id = %id, "Replaced material");
        Ok(replaced)
    }

    async fn delete(&self, id: &str) -> MaterialResult<bool> {
        let mut materials = self.materials.write().await;

        let before = materials.len();
        materials.retain(|m| m.id != id);

        if materials.len() < before {
            tracing::info!(material_id = %id, "Deleted material");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn update_stock(&self, id: &str, stock: f64) -> MaterialResult<Option<Material>> {
        let mut materials = self.materials.write().await;

        match materials.iter_mut().find(|m| m.id == id) {
            Some(material) => {
                material.stock = stock;
                tracing::info!(material_id = %id, stock, "Updated material stock");
                Ok(Some(material.clone()))
            }
            None => Ok(None),
        }
    }
}
