//! Integration tests for carcat-web endpoints
//!
//! Tests cover:
//! - Home, search and compare views
//! - Compare validation errors and method rejection
//! - Static image serving
//! - Render failure mapping
//! - Health and build info endpoints

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use carcat_common::catalog::{CarModelSummary, Comparison, SearchQuery};
use carcat_common::Dataset;
use carcat_web::render::{RenderError, Renderer};
use carcat_web::{build_router, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

const DATASET: &str = r#"{
    "manufacturers": [
        {"id": 1, "name": "Acme", "country": "US", "foundingYear": 1950},
        {"id": 2, "name": "Bolt", "country": "DE", "foundingYear": 1901}
    ],
    "categories": [
        {"id": 1, "name": "Sports"},
        {"id": 2, "name": "Roadster"}
    ],
    "carModels": [
        {
            "id": 7, "name": "Falcon", "manufacturerId": 1, "categoryId": 1, "year": 2020,
            "specifications": {"engine": "5.0L V8", "horsepower": 450, "transmission": "6-speed Manual", "drivetrain": "RWD"},
            "image": "falcon.jpg"
        },
        {
            "id": 8, "name": "Speedster", "manufacturerId": 2, "categoryId": 2, "year": 2021,
            "specifications": {"engine": "2.0L I4 Turbo", "horsepower": 300, "transmission": "8-speed DCT", "drivetrain": "AWD"},
            "image": "speedster.jpg"
        },
        {
            "id": 9, "name": "Falcon Sport", "manufacturerId": 1, "categoryId": 1, "year": 2022,
            "specifications": {"engine": "5.2L V8", "horsepower": 520, "transmission": "7-speed Automatic", "drivetrain": "RWD"},
            "image": "falcon-sport.jpg"
        }
    ]
}"#;

/// Test helper: app over the fixture dataset with a temp images directory
fn setup_app() -> (axum::Router, TempDir) {
    let images = TempDir::new().expect("create images dir");
    std::fs::write(images.path().join("falcon.jpg"), b"JPEGDATA").expect("write image");

    let dataset = Dataset::from_json_str(DATASET).expect("fixture should decode");
    let state = AppState::new(dataset, images.path());
    (build_router(state), images)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn extract_json(body: Body) -> Value {
    serde_json::from_str(&body_text(body).await).expect("Should parse JSON")
}

// =============================================================================
// Home
// =============================================================================

#[tokio::test]
async fn test_home_lists_all_models_for_compare() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains(r#"<option value="7">Falcon (2020)</option>"#));
    assert!(html.contains(r#"<option value="8">Speedster (2021)</option>"#));
    assert!(html.contains(r#"<option value="9">Falcon Sport (2022)</option>"#));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_by_name_and_year() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/search?q=FAL&year=2020")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Falcon (2020)"));
    assert!(html.contains("Acme, US (founded 1950)"));
    assert!(!html.contains("Falcon Sport"));
    assert!(!html.contains("Speedster"));
}

#[tokio::test]
async fn test_search_without_parameters_returns_everything() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("3 result(s)"));
    let falcon = html.find("Falcon (2020)").unwrap();
    let speedster = html.find("Speedster (2021)").unwrap();
    let sport = html.find("Falcon Sport (2022)").unwrap();
    assert!(falcon < speedster && speedster < sport);
}

#[tokio::test]
async fn test_search_repeated_parameter_uses_first_value() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/search?q=fal&q=her&year=2020&year=2022")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("1 result(s) for \"fal\" in 2020"));
    assert!(html.contains("Falcon (2020)"));
    assert!(!html.contains("Falcon Sport"));
}

#[tokio::test]
async fn test_search_non_numeric_year_matches_nothing() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/search?q=&year=twenty")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("No car models found."));
}

#[tokio::test]
async fn test_search_is_repeatable() {
    let (app, _images) = setup_app();

    let first = app.clone().oneshot(get("/search?q=spe")).await.unwrap();
    let second = app.oneshot(get("/search?q=spe")).await.unwrap();
    assert_eq!(
        body_text(first.into_body()).await,
        body_text(second.into_body()).await
    );
}

// =============================================================================
// Compare
// =============================================================================

#[tokio::test]
async fn test_compare_two_models() {
    let (app, _images) = setup_app();

    let response = app
        .oneshot(post_form("/compare", "carModelID1=8&carModelID2=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("<tr><th>Model</th><td>Speedster</td><td>Falcon</td></tr>"));
    assert!(html.contains("<tr><th>Horsepower</th><td>300</td><td>450</td></tr>"));
}

#[tokio::test]
async fn test_compare_model_with_itself() {
    let (app, _images) = setup_app();

    let response = app
        .oneshot(post_form("/compare", "carModelID1=7&carModelID2=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("<tr><th>Model</th><td>Falcon</td><td>Falcon</td></tr>"));
}

#[tokio::test]
async fn test_compare_ids_from_query_string() {
    let (app, _images) = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/compare?carModelID1=7&carModelID2=8")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("<tr><th>Model</th><td>Falcon</td><td>Speedster</td></tr>"));
}

#[tokio::test]
async fn test_compare_body_fields_take_precedence_over_query() {
    let (app, _images) = setup_app();

    let response = app
        .oneshot(post_form(
            "/compare?carModelID1=9&carModelID2=9",
            "carModelID1=8",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("<tr><th>Model</th><td>Speedster</td><td>Falcon Sport</td></tr>"));
}

#[tokio::test]
async fn test_compare_repeated_field_uses_first_value() {
    let (app, _images) = setup_app();

    let response = app
        .oneshot(post_form(
            "/compare",
            "carModelID1=7&carModelID1=8&carModelID2=8",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("<tr><th>Model</th><td>Falcon</td><td>Speedster</td></tr>"));
}

#[tokio::test]
async fn test_compare_missing_selection() {
    let (app, _images) = setup_app();

    for body in ["carModelID1=&carModelID2=7", "carModelID1=7", ""] {
        let response = app.clone().oneshot(post_form("/compare", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(
            body_text(response.into_body()).await,
            "Please select exactly two car models to compare"
        );
    }
}

#[tokio::test]
async fn test_compare_without_form_body_is_missing_selection() {
    let (app, _images) = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/compare")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare_invalid_and_unknown_ids() {
    let (app, _images) = setup_app();

    for body in ["carModelID1=abc&carModelID2=7", "carModelID1=999999&carModelID2=7"] {
        let response = app.clone().oneshot(post_form("/compare", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(body_text(response.into_body()).await, "Invalid car model ID");
    }
}

#[tokio::test]
async fn test_compare_rejects_get() {
    let (app, _images) = setup_app();

    let response = app
        .oneshot(get("/compare?carModelID1=7&carModelID2=8"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_text(response.into_body()).await, "Method not allowed");
}

// =============================================================================
// Unknown paths
// =============================================================================

#[tokio::test]
async fn test_unknown_path_shows_home() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains(r#"name="carModelID1""#));
}

// =============================================================================
// Static images
// =============================================================================

#[tokio::test]
async fn test_image_served() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/img/falcon.jpg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response.into_body()).await, "JPEGDATA");
}

#[tokio::test]
async fn test_missing_image_not_found() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/img/speedster.jpg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Render failures
// =============================================================================

struct BrokenRenderer;

impl Renderer for BrokenRenderer {
    fn render_home(&self, _dataset: &Dataset) -> Result<String, RenderError> {
        Err(RenderError::Format(std::fmt::Error))
    }

    fn render_search_results(
        &self,
        _query: &SearchQuery,
        _results: &[CarModelSummary],
    ) -> Result<String, RenderError> {
        Err(RenderError::Format(std::fmt::Error))
    }

    fn render_comparison(&self, _comparison: &Comparison) -> Result<String, RenderError> {
        Err(RenderError::Format(std::fmt::Error))
    }
}

#[tokio::test]
async fn test_render_failure_is_internal_server_error() {
    let images = TempDir::new().unwrap();
    let dataset = Dataset::from_json_str(DATASET).unwrap();
    let state = AppState::new(dataset, images.path()).with_renderer(Arc::new(BrokenRenderer));
    let app = build_router(state);

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response.into_body()).await, "Internal server error");

    // Validation still runs before rendering
    let response = app
        .oneshot(post_form("/compare", "carModelID1=&carModelID2=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health and build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "carcat-web");
    assert!(body["version"].is_string());
    assert_eq!(body["manufacturers"], 2);
    assert_eq!(body["car_models"], 3);
}

#[tokio::test]
async fn test_build_info_endpoint() {
    let (app, _images) = setup_app();

    let response = app.oneshot(get("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_profile"].is_string());
}
