//! Handler tests for the Print Profiles domain
//!
//! They exercise only the profiles router, not the full application.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_profiles::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn profile(id: &str, material_id: &str, recomendado: bool) -> PrintProfile {
    PrintProfile {
        id: id.to_string(),
        material_id: material_id.to_string(),
        nombre: format!("Perfil {id}"),
        descripcion: String::new(),
        temperatura_nozzle: 200,
        temperatura_cama: 60,
        velocidad_impresion: 50,
        altura_capa: 0.2,
        relleno: 20,
        velocidad_retraccion: 45,
        distancia_retraccion: 5.0,
        velocidad_ventilador: 100,
        es_recomendado: recomendado,
    }
}

fn seeded_app() -> axum::Router {
    let repo = InMemoryProfileRepository::with_profiles(vec![
        profile("pf001", "m001", true),
        profile("pf002", "m001", false),
        profile("pf003", "m002", true),
    ]);
    handlers::router(ProfileService::new(repo))
}

#[tokio::test]
async fn test_list_profiles_returns_seeded_order() {
    let app = seeded_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profiles: Vec<PrintProfile> = json_body(response.into_body()).await;
    let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["pf001", "pf002", "pf003"]);
}

#[tokio::test]
async fn test_recommended_for_material_returns_flagged_only() {
    let app = seeded_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/recomendados?material_id=m001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profiles: Vec<PrintProfile> = json_body(response.into_body()).await;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, "pf001");
}

#[tokio::test]
async fn test_recommended_without_material_spans_catalog() {
    let app = seeded_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/recomendados")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profiles: Vec<PrintProfile> = json_body(response.into_body()).await;
    let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["pf001", "pf003"]);
}

#[tokio::test]
async fn test_list_by_material_ignores_recommended_flag() {
    let app = seeded_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/material/m001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profiles: Vec<PrintProfile> = json_body(response.into_body()).await;
    assert_eq!(profiles.len(), 2);
}

#[tokio::test]
async fn test_get_profile_returns_200() {
    let app = seeded_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/pf001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profile: PrintProfile = json_body(response.into_body()).await;
    assert_eq!(profile.material_id, "m001");
    assert!(profile.es_recomendado);
}

#[tokio::test]
async fn test_get_unknown_profile_returns_404() {
    let app = seeded_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/pf999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_profile_returns_201() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "material_id": "m001",
                "nombre": "PLA Detalle Fino",
                "descripcion": "Capas de 0.1 mm",
                "temperatura_nozzle": 205,
                "temperatura_cama": 60,
                "velocidad_impresion": 40,
                "altura_capa": 0.1,
                "relleno": 25,
                "velocidad_retraccion": 45,
                "distancia_retraccion": 5.0,
                "velocidad_ventilador": 100,
                "es_recomendado": false
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let profile: PrintProfile = json_body(response.into_body()).await;
    assert_eq!(profile.nombre, "PLA Detalle Fino");
    assert!(!profile.id.is_empty());
}

#[tokio::test]
async fn test_create_profile_requires_material_id() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "material_id": "",
                "nombre": "Perfil huérfano"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replace_profile_keeps_id() {
    let app = seeded_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/pf002")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "material_id": "m001",
                "nombre": "Perfil pf002 v2",
                "temperatura_nozzle": 215,
                "es_recomendado": true
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let profile: PrintProfile = json_body(response.into_body()).await;
    assert_eq!(profile.id, "pf002");
    assert_eq!(profile.temperatura_nozzle, 215);
    assert!(profile.es_recomendado);
}

#[tokio::test]
async fn test_delete_profile_returns_204() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/pf003")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/pf003")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
