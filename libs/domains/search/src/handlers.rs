use axum::{extract::State, routing::post, Json, Router};
use axum_helpers::{
    errors::responses::{BadRequestRangeResponse, InternalServerErrorResponse},
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_materials::{Material, MaterialRepository};
use domain_products::{Product, ProductRepository};

use crate::error::SearchResult;
use crate::models::FilterRequest;
use crate::service::SearchService;

const TAG: &str = "Búsqueda";

/// OpenAPI documentation for the Search API
#[derive(OpenApi)]
#[openapi(
    paths(search_products, search_materials),
    components(
        schemas(
            FilterRequest,
            Material,
            domain_materials::Caracteristicas,
            domain_materials::MaterialType,
            Product,
            domain_products::Dimensiones
        ),
        responses(BadRequestRangeResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Catalog filtering endpoints")
    )
)]
pub struct ApiDoc;

/// Create the search router with all HTTP endpoints
pub fn router<M, P>(service: SearchService<M, P>) -> Router
where
    M: MaterialRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/productos", post(search_products))
        .route("/materiales", post(search_materials))
        .with_state(shared_service)
}

/// Filter the product catalog
#[utoipa::path(
    post,
    path = "/productos",
    tag = TAG,
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Matching products in catalog order", body = Vec<Product>),
        (status = 400, response = BadRequestRangeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<M, P>(
    State(service): State<Arc<SearchService<M, P>>>,
    ValidatedJson(request): ValidatedJson<FilterRequest>,
) -> SearchResult<Json<Vec<Product>>>
where
    M: MaterialRepository,
    P: ProductRepository,
{
    let products = service.search_products(request).await?;
    Ok(Json(products))
}

/// Filter the material catalog. Materials with exhausted stock never
/// appear in the result.
#[utoipa::path(
    post,
    path = "/materiales",
    tag = TAG,
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Matching in-stock materials in catalog order", body = Vec<Material>),
        (status = 400, response = BadRequestRangeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_materials<M, P>(
    State(service): State<Arc<SearchService<M, P>>>,
    ValidatedJson(request): ValidatedJson<FilterRequest>,
) -> SearchResult<Json<Vec<Material>>>
where
    M: MaterialRepository,
    P: ProductRepository,
{
    let materials = service.search_materials(request).await?;
    Ok(Json(materials))
}
