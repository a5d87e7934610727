// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP API tests against the fixture data.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{create_test_app, create_test_app_with, fixture, get_json, test_config};

#[tokio::test]
async fn test_health() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_api_users() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app, "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"user_id": 10, "name": "User 10"},
            {"user_id": 11, "name": "User 11"},
        ])
    );
}

#[tokio::test]
async fn test_api_directory_users() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app, "/api/v2/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": 141,
                "name": "Adam P.",
                "avatar": "https://intranet.stxnext.pl/api/images/users/141",
            },
            {
                "id": 176,
                "name": "Adrian K.",
                "avatar": "https://intranet.stxnext.pl/api/images/users/176",
            },
        ])
    );
}

#[tokio::test]
async fn test_api_mean_time_weekday() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/mean_time_weekday/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(app, "/api/v1/mean_time_weekday/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            ["Mon", 0.0],
            ["Tue", 30047.0],
            ["Wed", 24465.0],
            ["Thu", 23705.0],
            ["Fri", 0.0],
            ["Sat", 0.0],
            ["Sun", 0.0],
        ])
    );
}

#[tokio::test]
async fn test_negative_user_id_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("presence.csv");
    std::fs::write(&csv, "-5,2013-09-10,09:00:00,17:00:00\n").unwrap();
    let config = presence_analyzer::config::Config {
        data_csv: csv,
        ..test_config()
    };
    let (app, _) = create_test_app_with(config);

    let (status, body) = get_json(app.clone(), "/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"user_id": -5, "name": "User -5"}]));

    let (status, body) = get_json(app, "/api/v1/mean_time_weekday/-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[1], json!(["Tue", 28800.0]));
}

#[tokio::test]
async fn test_api_presence_weekday() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/presence_weekday/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(app, "/api/v1/presence_weekday/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 0],
            ["Tue", 30047],
            ["Wed", 24465],
            ["Thu", 23705],
            ["Fri", 0],
            ["Sat", 0],
            ["Sun", 0],
        ])
    );
}

#[tokio::test]
async fn test_api_presence_start_end() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app.clone(), "/api/v1/presence_start_end/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(app, "/api/v1/presence_start_end/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            ["Mon", 0.0, 0.0],
            ["Tue", 34745.0, 64792.0],
            ["Wed", 33592.0, 58057.0],
            ["Thu", 38926.0, 62631.0],
            ["Fri", 0.0, 0.0],
            ["Sat", 0.0, 0.0],
            ["Sun", 0.0, 0.0],
        ])
    );
}

#[tokio::test]
async fn test_non_numeric_user_id_rejected() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/mean_time_weekday/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let (app, _) = create_test_app();
    let (status, body) = get_json(app, "/this_site_doesnt_exist.html").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "not_found", "details": "/this_site_doesnt_exist.html"})
    );
}

#[tokio::test]
async fn test_missing_presence_source_is_server_error() {
    let config = presence_analyzer::config::Config {
        data_csv: fixture("missing.csv"),
        ..test_config()
    };
    let (app, _) = create_test_app_with(config);
    let (status, body) = get_json(app, "/api/v1/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "presence_data_error"}));
}

#[tokio::test]
async fn test_missing_directory_source_is_server_error() {
    let config = presence_analyzer::config::Config {
        data_xml: fixture("missing.xml"),
        ..test_config()
    };
    let (app, _) = create_test_app_with(config);
    let (status, body) = get_json(app, "/api/v2/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "directory_error"}));
}
