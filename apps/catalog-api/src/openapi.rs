//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "3D-printing marketplace catalog: products, materials, print profiles and search",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    nest(
        (path = "/api/materiales", api = domain_materials::ApiDoc),
        (path = "/api/productos", api = domain_products::ApiDoc),
        (path = "/api/perfiles-impresion", api = domain_profiles::ApiDoc),
        (path = "/api/buscar", api = domain_search::ApiDoc)
    )
)]
pub struct ApiDoc;
