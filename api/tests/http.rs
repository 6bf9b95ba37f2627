use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

use oliveml_api::application::http::server::http_server;
use oliveml_api::args::Args;

/// Server backed by an empty model directory: the artifact trio is absent,
/// exactly like a fresh deployment before the first training run.
async fn untrained_server() -> TestServer {
    let scratch = std::env::temp_dir().join(format!("oliveml-api-test-{}", uuid::Uuid::new_v4()));
    let args = Args::parse_from([
        "oliveml-api",
        "--model-dir",
        scratch.to_str().expect("utf-8 temp path"),
        "--dataset-path",
        scratch
            .join("food_health_dataset.csv")
            .to_str()
            .expect("utf-8 temp path"),
    ]);
    let state = http_server::state(Arc::new(args))
        .await
        .expect("state builds without an artifact");
    let router = http_server::router(state).expect("router builds");
    TestServer::new(router).expect("test server starts")
}

#[tokio::test]
async fn health_reports_models_not_loaded() {
    let server = untrained_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["models_loaded"], false);
}

#[tokio::test]
async fn recommend_foods_refuses_without_artifact() {
    let server = untrained_server().await;
    let response = server
        .post("/api/ml/recommend-foods")
        .json(&json!({
            "healthProfile": { "conditions": { "diabetes": true } },
            "foods": [],
            "topN": 5
        }))
        .await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("not loaded")
    );
}

#[tokio::test]
async fn predict_suitability_refuses_without_artifact() {
    let server = untrained_server().await;
    let response = server
        .post("/api/ml/predict-food-suitability")
        .json(&json!({
            "nutritionalInfo": { "calories": 250, "protein": 35, "carbohydrates": 15 },
            "category": "Lean Protein"
        }))
        .await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn bmi_does_not_need_the_model() {
    let server = untrained_server().await;
    let response = server
        .post("/api/ml/calculate-bmi")
        .json(&json!({ "height": 170, "weight": 70 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["bmi"], 24.22);
    assert_eq!(body["category"], "Normal");
    assert_eq!(body["healthRisk"], "minimal");
}

#[tokio::test]
async fn bmi_rejects_non_positive_measurements() {
    let server = untrained_server().await;
    let response = server
        .post("/api/ml/calculate-bmi")
        .json(&json!({ "height": 0, "weight": 70 }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid height or weight");
}
