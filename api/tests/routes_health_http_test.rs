mod helpers;

use helpers::test_app;
use serde_json::{Value, json};

const PROBABILITIES: [f32; 6] = [0.5, 0.1, 0.1, 0.1, 0.1, 0.1];

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(&PROBABILITIES);

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok", "service": "Food Health Classifier"}));
}

#[tokio::test]
async fn test_model_status_endpoint() {
    let app = test_app(&PROBABILITIES);

    let response = app.server.get("/model-status").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["model_type"], "efficientnet_b0");
    assert_eq!(body["num_classes"], 6);
    assert_eq!(body["best_accuracy"], 78.04);
    assert_eq!(body["input_size"], 224);
    // all helper labels except unknown_dish are in the built-in table
    assert_eq!(body["scored_classes"], 5);
    assert_eq!(body["confidence_threshold"], 0.5);
    assert!(body["nutrition_entries"].as_u64().unwrap() >= 100);
}

#[tokio::test]
async fn test_classes_endpoint_lists_sorted_labels() {
    let app = test_app(&PROBABILITIES);

    let response = app.server.get("/classes").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 6);

    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|class| class["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["pancakes", "pizza", "ramen", "sushi", "unknown_dish", "waffles"]
    );
    assert_eq!(body["data"][4], json!({"label": "unknown_dish", "has_nutrition": false}));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = test_app(&PROBABILITIES);

    let response = app.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/predict-image"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
    assert!(body["paths"]["/model-status"]["get"].is_object());
}
