use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ProfileResult;
use crate::models::{CreatePrintProfile, PrintProfile};
use crate::repository::ProfileRepository;
use crate::service::ProfileService;

const TAG: &str = "Perfiles";

/// OpenAPI documentation for the Print Profiles API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_profiles,
        create_profile,
        list_recommended_profiles,
        list_profiles_by_material,
        get_profile,
        replace_profile,
        delete_profile,
    ),
    components(
        schemas(PrintProfile, CreatePrintProfile),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Print profile and recommendation endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters for the recommended-profiles listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct RecommendedParams {
    /// Restrict the selection to one material
    pub material_id: Option<String>,
}

/// Create the print-profiles router with all HTTP endpoints
pub fn router<R: ProfileRepository + 'static>(service: ProfileService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/recomendados", get(list_recommended_profiles))
        .route("/material/{material_id}", get(list_profiles_by_material))
        .route(
            "/{id}",
            get(get_profile).put(replace_profile).delete(delete_profile),
        )
        .with_state(shared_service)
}

/// List all print profiles
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of print profiles", body = Vec<PrintProfile>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_profiles<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
) -> ProfileResult<Json<Vec<PrintProfile>>> {
    let profiles = service.list_profiles().await?;
    Ok(Json(profiles))
}

/// List recommended profiles, optionally restricted to one material
#[utoipa::path(
    get,
    path = "/recomendados",
    tag = TAG,
    params(RecommendedParams),
    responses(
        (status = 200, description = "Recommended profiles in stored order", body = Vec<PrintProfile>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_recommended_profiles<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    Query(params): Query<RecommendedParams>,
) -> ProfileResult<Json<Vec<PrintProfile>>> {
    let profiles = service
        .recommended_profiles(params.material_id.as_deref())
        .await?;
    Ok(Json(profiles))
}

/// List profiles tuned for a given material
#[utoipa::path(
    get,
    path = "/material/{material_id}",
    tag = TAG,
    params(
        ("material_id" = String, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Profiles for the material; empty for unknown ids", body = Vec<PrintProfile>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_profiles_by_material<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(material_id): Path<String>,
) -> ProfileResult<Json<Vec<PrintProfile>>> {
    let profiles = service.list_by_material(&material_id).await?;
    Ok(Json(profiles))
}

/// Create a new print profile
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreatePrintProfile,
    responses(
        (status = 201, description = "Print profile created successfully", body = PrintProfile),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePrintProfile>,
) -> ProfileResult<impl IntoResponse> {
    let profile = service.create_profile(input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Get a print profile by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Print profile ID")
    ),
    responses(
        (status = 200, description = "Print profile found", body = PrintProfile),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(id): Path<String>,
) -> ProfileResult<Json<PrintProfile>> {
    let profile = service.get_profile(&id).await?;
    Ok(Json(profile))
}

/// Replace a print profile (full-record overwrite)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Print profile ID")
    ),
    request_body = CreatePrintProfile,
    responses(
        (status = 200, description = "Print profile replaced successfully", body = PrintProfile),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CreatePrintProfile>,
) -> ProfileResult<Json<PrintProfile>> {
    let profile = service.replace_profile(&id, input).await?;
    Ok(Json(profile))
}

/// Delete a print profile
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Print profile ID")
    ),
    responses(
        (status = 204, description = "Print profile deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_profile<R: ProfileRepository>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(id): Path<String>,
) -> ProfileResult<impl IntoResponse> {
    service.delete_profile(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
