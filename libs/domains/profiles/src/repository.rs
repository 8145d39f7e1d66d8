use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProfileError, ProfileResult};
use crate::models::{CreatePrintProfile, PrintProfile};

/// Repository trait for PrintProfile persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// List all profiles in insertion order
    async fn list(&self) -> ProfileResult<Vec<PrintProfile>>;

    /// Get a profile by ID
    async fn get_by_id(&self, id: &str) -> ProfileResult<Option<PrintProfile>>;

    /// Create a new profile with a server-assigned ID
    async fn create(&self, input: CreatePrintProfile) -> ProfileResult<PrintProfile>;

    /// Replace an existing profile wholesale (PUT semantics)
    async fn replace(&self, id: &str, input: CreatePrintProfile) -> ProfileResult<PrintProfile>;

    /// Delete a profile by ID; returns whether it existed
    async fn delete(&self, id: &str) -> ProfileResult<bool>;
}

/// In-memory implementation of ProfileRepository.
///
/// Insertion-ordered `Vec` behind an `RwLock`; listing clones a snapshot.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<PrintProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a repository pre-populated with the given profiles,
    /// preserving their ids and order. Used for seed data and tests.
    pub fn with_profiles(profiles: Vec<PrintProfile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> ProfileResult<Vec<PrintProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProfileResult<Option<PrintProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: CreatePrintProfile) -> ProfileResult<PrintProfile> {
        let mut profiles = self.profiles.write().await;

        let profile = PrintProfile::new(input);
        profiles.push(profile.clone());

        tracing::info!(profile_id = %profile.id, "Created print profile");
        Ok(profile)
    }

    async fn replace(&self, id: &str, input: CreatePrintProfile) -> ProfileResult<PrintProfile> {
        let mut profiles = self.profiles.write().await;

        let slot = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;

        *slot = PrintProfile::with_id(id.to_string(), input);
        let replaced = slot.clone();

        tracing::info!(profile_id = %id, "Replaced print profile");
        Ok(replaced)
    }

    async fn delete(&self, id: &str) -> ProfileResult<bool> {
        let mut profiles = self.profiles.write().await;

        let before = profiles.len();
        profiles.retain(|p| p.id != id);

        if profiles.len() < before {
            tracing::info!(profile_id = %id, "Deleted print profile");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pla_input() -> CreatePrintProfile {
        CreatePrintProfile {
            material_id: "m001".to_string(),
            nombre: "PLA Estándar".to_string(),
            descripcion: "Perfil de calidad estándar".to_string(),
            temperatura_nozzle: 200,
            temperatura_cama: 60,
            velocidad_impresion: 50,
            altura_capa: 0.2,
            relleno: 20,
            velocidad_retraccion: 45,
            distancia_retraccion: 5.0,
            velocidad_ventilador: 100,
            es_recomendado: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_profile() {
        let repo = InMemoryProfileRepository::new();

        let profile = repo.create(pla_input()).await.unwrap();
        assert_eq!(profile.material_id, "m001");

        let fetched = repo.get_by_id(&profile.id).await.unwrap();
        assert_eq!(fetched.unwrap().id, profile.id);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryProfileRepository::new();

        let mut input = pla_input();
        let first = repo.create(input.clone()).await.unwrap();
        input.nombre = "PLA Rápido".to_string();
        let second = repo.create(input).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn test_replace_keeps_id() {
        let repo = InMemoryProfileRepository::new();
        let profile = repo.create(pla_input()).await.unwrap();

        let mut input = pla_input();
        input.temperatura_nozzle = 210;
        let replaced = repo.replace(&profile.id, input).await.unwrap();

        assert_eq!(replaced.id, profile.id);
        assert_eq!(replaced.temperatura_nozzle, 210);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_fails() {
        let repo = InMemoryProfileRepository::new();
        let result = repo.replace("missing", pla_input()).await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let repo = InMemoryProfileRepository::new();
        let profile = repo.create(pla_input()).await.unwrap();

        assert!(repo.delete(&profile.id).await.unwrap());
        assert!(!repo.delete(&profile.id).await.unwrap());
    }
}
