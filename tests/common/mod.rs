// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use presence_analyzer::config::Config;
use presence_analyzer::routes::create_router;
use presence_analyzer::AppState;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Test configuration pointing at the fixture data.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        data_csv: fixture("test_data.csv"),
        data_xml: fixture("test_users.xml"),
        ..Config::default()
    }
}

/// Create a test app backed by the given configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::from_config(config).expect("test config is valid"));
    (create_router(state.clone()), state)
}

/// Create a test app backed by the fixture data.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(test_config())
}

/// Send a GET request and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).expect("Response should be JSON");
    (status, json)
}
