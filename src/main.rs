// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence Analyzer API Server
//!
//! Serves weekly presence statistics computed from daily attendance records.

use presence_analyzer::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Presence Analyzer API");

    let state = Arc::new(AppState::from_config(config.clone())?);
    tracing::info!(
        csv = %config.data_csv.display(),
        xml = %config.data_xml.display(),
        cache_ttl_secs = config.cache_ttl_secs,
        "Data sources configured"
    );

    // Refresh the user directory, keeping the local copy on failure
    if let Some(url) = &config.directory_source_url {
        let client = reqwest::Client::new();
        if let Err(e) = state.directory.refresh_from_url(&client, url).await {
            tracing::warn!(error = %e, "User directory refresh failed, using local copy");
        }
    }

    // Build router
    let app = presence_analyzer::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("presence_analyzer=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
