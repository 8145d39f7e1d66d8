use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProfileError, ProfileResult};
use crate::models::{CreatePrintProfile, PrintProfile};
use crate::repository::ProfileRepository;

/// Service layer for print-profile business logic, including the
/// recommended-profile selection.
#[derive(Clone)]
pub struct ProfileService<R: ProfileRepository> {
    repository: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all profiles in insertion order
    #[instrument(skip(self))]
    pub async fn list_profiles(&self) -> ProfileResult<Vec<PrintProfile>> {
        self.repository.list().await
    }

    /// List profiles tuned for a given material, in stored order.
    /// Unknown material ids yield an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn list_by_material(&self, material_id: &str) -> ProfileResult<Vec<PrintProfile>> {
        let profiles = self.repository.list().await?;
        Ok(profiles
            .into_iter()
            .filter(|p| p.material_id == material_id)
            .collect())
    }

    /// Select every profile flagged recommended, optionally restricted to
    /// one material. Stored order is preserved and several profiles per
    /// material may be recommended at once.
    #[instrument(skip(self))]
    pub async fn recommended_profiles(
        &self,
        material_id: Option<&str>,
    ) -> ProfileResult<Vec<PrintProfile>> {
        let profiles = self.repository.list().await?;
        Ok(profiles
            .into_iter()
            .filter(|p| p.es_recomendado)
            .filter(|p| material_id.is_none_or(|id| p.material_id == id))
            .collect())
    }

    /// Get a profile by ID
    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: &str) -> ProfileResult<PrintProfile> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))
    }

    /// Create a new profile
    #[instrument(skip(self, input), fields(profile_name = %input.nombre))]
    pub async fn create_profile(&self, input: CreatePrintProfile) -> ProfileResult<PrintProfile> {
        input
            .validate()
            .map_err(|e| ProfileError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace a profile wholesale (PUT semantics, no partial merge)
    #[instrument(skip(self, input))]
    pub async fn replace_profile(
        &self,
        id: &str,
        input: CreatePrintProfile,
    ) -> ProfileResult<PrintProfile> {
        input
            .validate()
            .map_err(|e| ProfileError::Validation(e.to_string()))?;

        self.repository.replace(id, input).await
    }

    /// Delete a profile
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, id: &str) -> ProfileResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProfileError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
