//! Black-box tests for the `/analyze` endpoint.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use terramind_service::config::Settings;
use terramind_service::startup::Application;

async fn spawn_app() -> u16 {
    std::env::set_var("APP__PORT", "0");
    std::env::set_var("TERRAMIND_DEMO_MODE", "true");

    let settings = Settings::load().expect("Failed to load config");
    let app = Application::build(settings)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

async fn analyze(port: u16, body: Value) -> (reqwest::StatusCode, Value) {
    let response = Client::new()
        .post(format!("http://localhost:{}/analyze", port))
        .json(&body)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body = response.json().await.expect("Failed to parse JSON");
    (status, body)
}

#[tokio::test]
async fn analysis_response_matches_schema() {
    let port = spawn_app().await;

    let (status, body) = analyze(
        port,
        json!({
            "query": "vegetation condition around the farm",
            "coordinates": { "lat": 26.9124, "lng": 75.7873 },
            "analysis_type": "agriculture"
        }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["model"], "TerraMind-1.0-large");

    let analysis = &body["analysis"];
    assert!(analysis["land_use_classification"]["classes"].is_object());
    assert!(analysis["vegetation_health"]["ndvi_score"].is_number());
    assert!(analysis["vegetation_health"]["temporal_trends"]["6_month_change"].is_string());
    assert_eq!(analysis["change_detection"]["hotspots"].as_array().unwrap().len(), 2);
    assert!(analysis["environmental_assessment"]["predictive_insights"]["5_year_outlook"]
        .is_string());
    assert!(analysis["multimodal_confidence"].is_number());
    assert_eq!(analysis["geospatial_insights"].as_array().unwrap().len(), 3);
    assert_eq!(analysis["risk_factors"].as_array().unwrap().len(), 3);

    let metadata = &body["metadata"];
    assert_eq!(metadata["analysis_type"], "agriculture");
    assert_eq!(metadata["coordinates"]["lat"], 26.9124);
    assert_eq!(
        metadata["modalities_processed"],
        json!(["optical", "sar", "climate", "text"])
    );
    assert!(metadata["processing_time"].is_number());
}

#[tokio::test]
async fn urban_coordinates_classify_as_urban() {
    let port = spawn_app().await;

    // Mumbai
    let (status, body) = analyze(
        port,
        json!({ "coordinates": { "lat": 19.0760, "lng": 72.8777 } }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body["analysis"]["land_use_classification"]["primary_class"],
        "urban"
    );
    assert_eq!(
        body["analysis"]["risk_factors"][0]["type"],
        "air_pollution"
    );
}

#[tokio::test]
async fn coastal_coordinates_classify_as_coastal() {
    let port = spawn_app().await;

    // Pondicherry: coastal but outside every urban radius
    let (status, body) = analyze(
        port,
        json!({ "coordinates": { "lat": 11.9416, "lng": 79.8083 } }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body["analysis"]["land_use_classification"]["primary_class"],
        "coastal_mixed"
    );
    assert_eq!(
        body["analysis"]["risk_factors"][0]["type"],
        "sea_level_rise"
    );
}

#[tokio::test]
async fn inland_coordinates_classify_as_agricultural() {
    let port = spawn_app().await;

    // Jaipur
    let (status, body) = analyze(
        port,
        json!({ "coordinates": { "lat": 26.9124, "lng": 75.7873 } }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body["analysis"]["land_use_classification"]["primary_class"],
        "agricultural"
    );
}

#[tokio::test]
async fn empty_request_takes_defaults() {
    let port = spawn_app().await;

    let (status, body) = analyze(port, json!({})).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["metadata"]["analysis_type"], "general");
    assert_eq!(body["metadata"]["coordinates"], json!({ "lat": 0.0, "lng": 0.0 }));
    // 0/0 is far from every reference point
    assert_eq!(
        body["analysis"]["land_use_classification"]["primary_class"],
        "agricultural"
    );
}

#[tokio::test]
async fn missing_body_is_a_bad_request() {
    let port = spawn_app().await;

    let response = Client::new()
        .post(format!("http://localhost:{}/analyze", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("No data provided"));
}

#[tokio::test]
async fn out_of_range_coordinates_are_unprocessable() {
    let port = spawn_app().await;

    let (status, body) = analyze(
        port,
        json!({ "coordinates": { "lat": 120.0, "lng": 77.1 } }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");
}
