//! Integration tests for the calculator endpoints

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};

fn valid_body() -> Value {
    json!({
        "age": 25,
        "weight": 70,
        "height": 170,
        "sex": "male",
        "goal": "weight_loss",
        "trainingFrequency": 4,
        "trainingIntensity": "moderate",
        "approach": "moderate"
    })
}

#[tokio::test]
async fn test_calculate_returns_camel_case_result() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/calculate", &valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["bmr"], 1643);
    assert_eq!(response["tdee"], 2547);
    assert_eq!(response["targetCalories"], 2089);
    assert_eq!(response["calorieAdjustment"], -458);
    assert_eq!(response["activityMultiplier"], 1.55);
    assert_eq!(response["macros"]["protein"], 140);
    assert_eq!(response["macros"]["carbsPercentage"], 46);
    assert!(response["methodology"]["bmrFormula"]
        .as_str()
        .unwrap()
        .starts_with("Mifflin-St Jeor"));
    assert!(response["warnings"].as_array().unwrap().is_empty());
    assert!(!response["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_calculate_uses_training_defaults() {
    let app = common::TestApp::new();
    let body = json!({
        "age": 25,
        "weight": 70,
        "height": 170,
        "sex": "male",
        "goal": "weight_loss"
    });

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["activityMultiplier"], 1.55);
    assert_eq!(response["targetCalories"], 2089);
}

#[tokio::test]
async fn test_calculate_with_body_fat_uses_katch_mcardle() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body["bodyFatPercentage"] = json!(15);

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["bmr"], 1656);
    assert!(response["methodology"]["bmrFormula"]
        .as_str()
        .unwrap()
        .starts_with("Katch-McArdle"));
}

#[rstest]
#[case("age")]
#[case("weight")]
#[case("height")]
#[case("sex")]
#[case("goal")]
#[tokio::test]
async fn test_calculate_missing_required_field_is_incomplete(#[case] field: &str) {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove(field);

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "INCOMPLETE_DATA");
    assert_eq!(response["error"]["field"], field);
}

#[rstest]
#[case("sex")]
#[case("goal")]
#[tokio::test]
async fn test_calculate_empty_string_choice_is_incomplete(#[case] field: &str) {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body[field] = json!("");

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "INCOMPLETE_DATA");
    assert_eq!(response["error"]["field"], field);
}

#[tokio::test]
async fn test_calculate_missing_goal_is_incomplete() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("goal");

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "INCOMPLETE_DATA");
    assert_eq!(response["error"]["message"], "Incomplete data");
    assert_eq!(response["error"]["field"], "goal");
    assert!(response.get("bmr").is_none());
}

#[tokio::test]
async fn test_calculate_zero_weight_is_incomplete() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body["weight"] = json!(0);

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "INCOMPLETE_DATA");
}

#[tokio::test]
async fn test_calculate_implausible_height_is_validation_error() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body["height"] = json!(400);

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["field"], "height");
}

#[tokio::test]
async fn test_calculate_unknown_enum_is_bad_request() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body["approach"] = json!("extreme");

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_calculate_malformed_json_is_bad_request() {
    let app = common::TestApp::new();

    let (status, response) = app.post("/api/calculate", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn test_calculate_negative_bmr_is_calculation_failure() {
    let app = common::TestApp::new();
    let body = json!({
        "age": 150,
        "weight": 20,
        "height": 50,
        "sex": "female",
        "goal": "weight_loss"
    });

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "CALCULATION_FAILED");
    assert!(response.get("bmr").is_none());
}

#[tokio::test]
async fn test_calculate_minor_gets_age_warning() {
    let app = common::TestApp::new();
    let mut body = valid_body();
    body["age"] = json!(17);

    let (status, response) = app.post("/api/calculate", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    let warnings = response["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("pediatric"));
}

#[tokio::test]
async fn test_calculate_is_deterministic() {
    let app = common::TestApp::new();
    let body = valid_body().to_string();

    let (_, first) = app.post("/api/calculate", &body).await;
    let (_, second) = app.post("/api/calculate", &body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_info_lists_references() {
    let app = common::TestApp::new();

    let (status, response) = app.get("/api/info").await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["name"], "NutriCalc Pro API");
    assert_eq!(response["version"], "1.0.0");
    let references = response["references"].as_array().unwrap();
    assert_eq!(references.len(), 4);
    assert_eq!(references[0]["name"], "Mifflin-St Jeor Equation");
    assert!(references[3]["source"].as_str().unwrap().starts_with("Harris JA"));
}
