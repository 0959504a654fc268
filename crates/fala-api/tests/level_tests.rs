use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common::TestClient;

#[tokio::test]
async fn fifteen_levels_with_targets() {
    let client = TestClient::new();
    let response = client.get("/levels").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let levels = json.as_array().unwrap();
    assert_eq!(levels.len(), 15);
    assert_eq!(levels[0]["level"], "A1.1");
    assert_eq!(levels[0]["target_accuracy"], 0.8);
    assert_eq!(levels[14]["level"], "B1.5");
    assert_eq!(levels[14]["target_accuracy"], 0.9);
}

#[tokio::test]
async fn level_test_generates_questions() {
    let client = TestClient::new();
    let response = client.get("/levels/A1.1/test?count=5").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["level"], "A1.1");
    assert_eq!(json["target_accuracy"], 0.8);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for q in questions {
        let kind = q["kind"].as_str().unwrap();
        assert!(kind == "vocabulary" || kind == "conjugation");
        assert!(q["answer"].is_string());
    }
}

#[tokio::test]
async fn unknown_level_is_404() {
    let client = TestClient::new();
    let response = client.get("/levels/C2.9/test").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn passing_a_test_advances_one_step() {
    let client = TestClient::new();
    let response = client
        .post_json("/levels/progress", &json!({"level": "A1.1", "accuracy": 0.9}))
        .await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["passed"], true);
    assert_eq!(json["target_accuracy"], 0.8);
    assert_eq!(json["progress"]["current_level"], "A1.2");
    assert_eq!(json["progress"]["highest_passed"], "A1.1");
    assert!(json["evaluated_at"].is_string());
}

#[tokio::test]
async fn failing_a_test_changes_nothing() {
    let client = TestClient::new();
    let response = client
        .post_json("/levels/progress", &json!({"level": "A1.1", "accuracy": 0.4}))
        .await;

    let json: Value = response.json();
    assert_eq!(json["passed"], false);
    assert_eq!(json["progress"]["current_level"], "A1.1");
    assert!(json["progress"].get("highest_passed").is_none());
}

#[tokio::test]
async fn a_test_above_the_current_level_cannot_skip() {
    let client = TestClient::new();
    let response = client
        .post_json(
            "/levels/progress",
            &json!({
                "progress": {"current_level": "A1.1"},
                "level": "A2.3",
                "accuracy": 1.0
            }),
        )
        .await;

    let json: Value = response.json();
    assert_eq!(json["passed"], true);
    assert_eq!(json["progress"]["current_level"], "A1.1");
}

#[tokio::test]
async fn terminal_level_stays_put() {
    let client = TestClient::new();
    let response = client
        .post_json(
            "/levels/progress",
            &json!({
                "progress": {"current_level": "B1.5", "highest_passed": "B1.4"},
                "level": "B1.5",
                "accuracy": 0.95
            }),
        )
        .await;

    let json: Value = response.json();
    assert_eq!(json["passed"], true);
    assert_eq!(json["progress"]["current_level"], "B1.5");
    assert_eq!(json["progress"]["highest_passed"], "B1.5");
}

#[tokio::test]
async fn out_of_range_accuracy_is_rejected() {
    let client = TestClient::new();
    let response = client
        .post_json("/levels/progress", &json!({"level": "A1.1", "accuracy": 1.5}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = client
        .post_json("/levels/progress", &json!({"level": "A1.1", "accuracy": -0.1}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a2_band_requires_a_higher_target() {
    let client = TestClient::new();
    // 0.82 passes A1 but not A2.
    let response = client
        .post_json(
            "/levels/progress",
            &json!({
                "progress": {"current_level": "A2.1", "highest_passed": "A1.5"},
                "level": "A2.1",
                "accuracy": 0.82
            }),
        )
        .await;

    let json: Value = response.json();
    assert_eq!(json["passed"], false);
    assert_eq!(json["target_accuracy"], 0.85);
    assert_eq!(json["progress"]["current_level"], "A2.1");
}
