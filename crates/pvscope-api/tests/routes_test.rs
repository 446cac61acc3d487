//! Router tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pvscope_api::{create_router, AppState};
use pvscope_core::{PvCoefficients, PvEstimator};
use pvscope_geo::PolygonAreaMeasurer;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(AppState::default()))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok", "service": "pvscope-api"}));
}

#[tokio::test]
async fn test_estimate_reference_area() {
    let (status, body) = post_json(app(), "/api/v1/estimate", json!({"area_m2": 1000.0})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimation"]["totalArea"], 1000.0);
    assert_eq!(body["estimation"]["potential"], "high");
    assert_eq!(body["formatted"]["installedCapacity"], "126.00 kWp");
    assert_eq!(body["color"], "#22c55e");
    assert_eq!(body["breakdown"]["bars"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_estimate_rejects_negative_area() {
    let (status, body) = post_json(app(), "/api/v1/estimate", json!({"area_m2": -5.0})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
    assert!(body["details"].as_str().unwrap().contains("area_m2"));
}

#[tokio::test]
async fn test_estimate_rejects_wrong_field_type_with_json_error() {
    let (status, body) = post_json(app(), "/api/v1/estimate", json!({"area_m2": "large"})).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "Malformed request body");
    assert!(body["details"].as_str().unwrap().contains("area_m2"));
}

#[tokio::test]
async fn test_estimate_rejects_missing_field_with_json_error() {
    let (status, body) = post_json(app(), "/api/v1/export", json!({})).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "Malformed request body");
}

#[tokio::test]
async fn test_measure_rejects_invalid_json_syntax() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/measure")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Malformed request body");
}

#[tokio::test]
async fn test_estimate_uses_configured_coefficients() {
    let coefficients = PvCoefficients { solar_irradiance: 1000.0, ..Default::default() };
    let state = AppState::new(
        PvEstimator::new(coefficients).unwrap(),
        PolygonAreaMeasurer::geodesic(),
    );
    let app = create_router(Arc::new(state));

    let (status, body) = post_json(app, "/api/v1/estimate", json!({"area_m2": 1000.0})).await;

    assert_eq!(status, StatusCode::OK);
    let annual_yield = body["estimation"]["annualYield"].as_f64().unwrap();
    assert!((annual_yield - 94_500.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_measure_feature() {
    let feature = json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-73.936, 40.730], [-73.936, 40.731], [-73.935, 40.731], [-73.935, 40.730], [-73.936, 40.730]
            ]]
        }
    });

    let (status, body) = post_json(app(), "/api/v1/measure", feature).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "geodesic");
    let area = body["area_m2"].as_f64().unwrap();
    assert!(area > 9_000.0 && area < 9_800.0);
    assert_eq!(body["bounds"]["min_lat"], 40.730);
    assert_eq!(body["estimation"]["estimation"]["potential"], "high");
    assert!(body["centroid"]["lat"].as_f64().unwrap() > 40.730);
    assert_eq!(body["overlay"]["score"], 100.0);
    assert_eq!(body["overlay"]["fillColor"], "#22c55e");
}

#[tokio::test]
async fn test_measure_rejects_point() {
    let point = json!({"type": "Point", "coordinates": [-73.936, 40.730]});

    let (status, body) = post_json(app(), "/api/v1/measure", point).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid geometry");
}

#[tokio::test]
async fn test_export_is_an_attachment() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/export")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"area_m2": 10000.0}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"pv-estimation.json\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["installedCapacity"], "1.26 MWp");
    assert_eq!(body["annualYield"], "1.42 GWh");
    assert_eq!(body["potential"], "high");
}
