use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestQuantityResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MaterialResult;
use crate::models::{Caracteristicas, CreateMaterial, Material, MaterialType, StockUpdate};
use crate::repository::MaterialRepository;
use crate::service::MaterialService;

const TAG: &str = "Materiales";

/// OpenAPI documentation for the Materials API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_materials,
        list_materials_by_type,
        create_material,
        get_material,
        replace_material,
        delete_material,
        update_stock,
    ),
    components(
        schemas(Material, CreateMaterial, StockUpdate, Caracteristicas, MaterialType),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestQuantityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Material catalog and stock ledger endpoints")
    )
)]
pub struct ApiDoc;

/// Create the materials router with all HTTP endpoints
pub fn router<R: MaterialRepository + 'static>(service: MaterialService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route("/tipo/{tipo}", get(list_materials_by_type))
        .route(
            "/{id}",
            get(get_material)
                .put(replace_material)
                .delete(delete_material),
        )
        .route("/{id}/stock", put(update_stock))
        .with_state(shared_service)
}

/// List all materials
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of materials", body = Vec<Material>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_materials<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
) -> MaterialResult<Json<Vec<Material>>> {
    let materials = service.list_materials().await?;
    Ok(Json(materials))
}

/// List materials of a given type
#[utoipa::path(
    get,
    path = "/tipo/{tipo}",
    tag = TAG,
    params(
        ("tipo" = String, Path, description = "Material type (filamento, resina)")
    ),
    responses(
        (status = 200, description = "Materials of the given type; empty for unknown types", body = Vec<Material>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_materials_by_type<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    Path(tipo): Path<String>,
) -> MaterialResult<Json<Vec<Material>>> {
    let materials = service.list_by_type(&tipo).await?;
    Ok(Json(materials))
}

/// Create a new material
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateMaterial,
    responses(
        (status = 201, description = "Material created successfully", body = Material),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_material<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateMaterial>,
) -> MaterialResult<impl IntoResponse> {
    let material = service.create_material(input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// Get a material by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Material found", body = Material),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_material<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    Path(id): Path<String>,
) -> MaterialResult<Json<Material>> {
    let material = service.get_material(&id).await?;
    Ok(Json(material))
}

/// Replace a material (full-record overwrite)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Material ID")
    ),
    request_body = CreateMaterial,
    responses(
        (status = 200, description = "Material replaced successfully", body = Material),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_material<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CreateMaterial>,
) -> MaterialResult<Json<Material>> {
    let material = service.replace_material(&id, input).await?;
    Ok(Json(material))
}

/// Delete a material
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Material ID")
    ),
    responses(
        (status = 204, description = "Material deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_material<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    Path(id): Path<String>,
) -> MaterialResult<impl IntoResponse> {
    service.delete_material(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Overwrite the stock quantity of a material
#[utoipa::path(
    put,
    path = "/{id}/stock",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Material ID")
    ),
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Stock updated; returns the updated material", body = Material),
        (status = 400, response = BadRequestQuantityResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_stock<R: MaterialRepository>(
    State(service): State<Arc<MaterialService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<StockUpdate>,
) -> MaterialResult<Json<Material>> {
    let material = service.set_stock(&id, input.stock).await?;
    Ok(Json(material))
}
