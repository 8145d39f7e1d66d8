//! API routes module

use axum::Router;
use std::sync::Arc;

use domain_materials::MaterialService;
use domain_products::ProductService;
use domain_profiles::ProfileService;
use domain_search::SearchService;

use crate::state::AppState;

/// Create all API routes.
///
/// The search service shares the material and product repositories with
/// their CRUD services, so a stock update is immediately visible to the
/// filtering endpoints.
pub fn routes(state: &AppState) -> Router {
    let materials = MaterialService::new(state.materials.clone());
    let products = ProductService::new(state.products.clone());
    let profiles = ProfileService::new(state.profiles.clone());
    let search = SearchService::new(
        Arc::new(state.materials.clone()),
        Arc::new(state.products.clone()),
    );

    Router::new()
        .nest("/materiales", domain_materials::handlers::router(materials))
        .nest("/productos", domain_products::handlers::router(products))
        .nest(
            "/perfiles-impresion",
            domain_profiles::handlers::router(profiles),
        )
        .nest("/buscar", domain_search::handlers::router(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::config::Config;
    use core_config::{app_info, server::ServerConfig, Environment};

    fn test_state() -> AppState {
        AppState::seeded(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        })
    }

    #[tokio::test]
    async fn test_stock_update_is_visible_to_search() {
        let app = routes(&test_state());

        // Exhaust m001's stock through the materials endpoint
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/materiales/m001/stock")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_string(&json!({"stock": 0.0})).unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The search front door no longer offers it
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/buscar/materiales")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let materials: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0]["id"], "m002");
    }

    #[tokio::test]
    async fn test_recommended_profiles_route_is_wired() {
        let app = routes(&test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/perfiles-impresion/recomendados?material_id=m001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let profiles: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0]["id"], "pf001");
    }
}
