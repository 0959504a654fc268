use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestClient;

#[tokio::test]
async fn health_returns_ok() {
    let client = TestClient::new();
    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn short_query_is_rejected() {
    let client = TestClient::new();
    let response = client.get("/search?q=a").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["error"], "validation");
}

#[tokio::test]
async fn whitespace_padding_does_not_bypass_the_minimum() {
    let client = TestClient::new();
    let response = client.get("/search?q=%20%20a%20%20").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let client = TestClient::new();
    let response = client.get("/search").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn conjugate_falar_builds_a_conjugation_card() {
    let client = TestClient::new();
    let response = client.get("/search?q=conjugate%20falar").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let card = &json["smart_card"];
    assert_eq!(card["type"], "conjugation");
    assert_eq!(card["infinitive"], "FALAR");
    assert_eq!(card["href"], "/verbs/falar");
    assert!(card["present_preview"].as_str().unwrap().contains("falo"));
}

#[tokio::test]
async fn bare_infinitive_also_builds_a_card() {
    let client = TestClient::new();
    let response = client.get("/search?q=falar").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["smart_card"]["type"], "conjugation");
}

#[tokio::test]
async fn translation_question_resolves_vocabulary() {
    let client = TestClient::new();
    let response = client.get("/search?q=how%20do%20you%20say%20hello").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let card = &json["smart_card"];
    assert_eq!(card["type"], "translation");
    assert_eq!(card["portuguese"], "olá");
}

#[tokio::test]
async fn tense_question_builds_a_tense_card() {
    let client = TestClient::new();
    let response = client.get("/search?q=past%20of%20falar").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let card = &json["smart_card"];
    assert_eq!(card["type"], "tense");
    assert_eq!(card["tense"], "Preterite");
    let forms = card["forms"].as_array().unwrap();
    assert!(forms.iter().any(|f| f["conjugation"] == "falei"));
}

#[tokio::test]
async fn ser_vs_estar_surfaces_the_grammar_topic() {
    let client = TestClient::new();
    let response = client.get("/search?q=ser%20vs%20estar").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    let card = &json["smart_card"];
    assert_eq!(card["type"], "grammar");
    assert_eq!(card["id"], "ser-vs-estar");
}

#[tokio::test]
async fn accent_insensitive_results() {
    let client = TestClient::new();
    let plain: Value = client.get("/search?q=ola").await.json();
    let results = plain["results"].as_array().unwrap();
    assert!(results.iter().any(|r| r["title"] == "olá"));
}

#[tokio::test]
async fn conjugated_form_query_surfaces_its_verb() {
    let client = TestClient::new();
    let json: Value = client.get("/search?q=falei").await.json();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["type"], "conjugation");
    assert_eq!(results[0]["href"], "/verbs/falar");
}

#[tokio::test]
async fn no_match_returns_empty_results_and_null_card() {
    let client = TestClient::new();
    let response = client.get("/search?q=zzzzzz").await;
    response.assert_status(StatusCode::OK);

    let json: Value = response.json();
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
    assert!(json["smart_card"].is_null());
}

#[tokio::test]
async fn identical_queries_return_identical_responses() {
    let client = TestClient::new();
    let first: Value = client.get("/search?q=fal").await.json();
    let second: Value = client.get("/search?q=fal").await.json();
    assert_eq!(first, second);
}
