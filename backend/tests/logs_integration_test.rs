//! Integration tests for food and workout log endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_food_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/logs/food").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_and_list_food() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    let body = json!({
        "food_name": "Oatmeal",
        "calories": 300.0,
        "protein_g": 10.0,
        "fat_g": 5.0,
        "carbohydrates_g": 54.0
    });
    let (status, response) = app
        .post_auth("/api/v1/logs/food", &body.to_string(), &user.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["food_name"], "Oatmeal");
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert!(!created["logged_at"].as_str().unwrap().is_empty());

    let (status, response) = app.get_auth("/api/v1/logs/food", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let logs: serde_json::Value = serde_json::from_str(&response).unwrap();
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["calories"], 300.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_food_list_is_newest_first() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    for name in ["Breakfast", "Lunch", "Dinner"] {
        let body = json!({
            "food_name": name,
            "calories": 500.0,
            "protein_g": 20.0,
            "fat_g": 15.0,
            "carbohydrates_g": 60.0
        });
        let (status, _) = app
            .post_auth("/api/v1/logs/food", &body.to_string(), &user.token)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, response) = app.get_auth("/api/v1/logs/food", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let logs: serde_json::Value = serde_json::from_str(&response).unwrap();
    let names: Vec<&str> = logs
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["food_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dinner", "Lunch", "Breakfast"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_food_rejects_negative_calories() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    let body = json!({
        "food_name": "Mystery",
        "calories": -100.0,
        "protein_g": 0.0,
        "fat_g": 0.0,
        "carbohydrates_g": 0.0
    });
    let (status, _) = app
        .post_auth("/api/v1/logs/food", &body.to_string(), &user.token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_and_list_workout() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    let body = json!({
        "activity_name": "Running",
        "duration_minutes": 30,
        "calories_burned": 350.0
    });
    let (status, response) = app
        .post_auth("/api/v1/logs/workouts", &body.to_string(), &user.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["activity_name"], "Running");
    assert_eq!(created["duration_minutes"], 30);

    let (status, response) = app.get_auth("/api/v1/logs/workouts", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let logs: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(logs.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logs_are_scoped_per_user() {
    let app = common::TestApp::new().await;
    let alice = app.test_user();
    let bob = app.test_user();

    let body = json!({
        "food_name": "Salad",
        "calories": 150.0,
        "protein_g": 5.0,
        "fat_g": 8.0,
        "carbohydrates_g": 12.0
    });
    let (status, _) = app
        .post_auth("/api/v1/logs/food", &body.to_string(), &alice.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.get_auth("/api/v1/logs/food", &bob.token).await;
    assert_eq!(status, StatusCode::OK);

    let logs: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(logs.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_food_for_other_day_is_empty() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    let body = json!({
        "food_name": "Toast",
        "calories": 200.0,
        "protein_g": 6.0,
        "fat_g": 4.0,
        "carbohydrates_g": 36.0
    });
    let (status, _) = app
        .post_auth("/api/v1/logs/food", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app
        .get_auth("/api/v1/logs/food?date=2000-01-01", &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let logs: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(logs.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_analyze_rejected_while_inference_disabled() {
    let app = common::TestApp::new().await;
    let user = app.test_user();

    let body = json!({ "photo_data_uri": "data:image/png;base64,aGVsbG8=" });
    let (status, response) = app
        .post_auth("/api/v1/logs/food/analyze", &body.to_string(), &user.token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "BAD_REQUEST");
}
