//! Application state management

use domain_materials::InMemoryMaterialRepository;
use domain_products::InMemoryProductRepository;
use domain_profiles::InMemoryProfileRepository;

use crate::config::Config;

/// Shared application state.
///
/// The in-memory repositories are cheap to clone (shared interior), so
/// the catalog services and the search service all see the same data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub materials: InMemoryMaterialRepository,
    pub products: InMemoryProductRepository,
    pub profiles: InMemoryProfileRepository,
}

impl AppState {
    /// Empty catalogs.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            materials: InMemoryMaterialRepository::new(),
            products: InMemoryProductRepository::new(),
            profiles: InMemoryProfileRepository::new(),
        }
    }

    /// Catalogs pre-populated with the development fixtures.
    pub fn seeded(config: Config) -> Self {
        Self {
            config,
            materials: InMemoryMaterialRepository::with_materials(crate::seed::materials()),
            products: InMemoryProductRepository::with_products(crate::seed::products()),
            profiles: InMemoryProfileRepository::with_profiles(crate::seed::profiles()),
        }
    }
}
