// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::cache::DEFAULT_TTL_SECS;
use chrono::Duration;
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Presence CSV file
    pub data_csv: PathBuf,
    /// User directory XML file
    pub data_xml: PathBuf,
    /// Where to download a fresh directory from at startup (optional)
    pub directory_source_url: Option<String>,
    /// Presence cache staleness window in seconds
    pub cache_ttl_secs: i64,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_csv: PathBuf::from("tests/fixtures/test_data.csv"),
            data_xml: PathBuf::from("tests/fixtures/test_users.xml"),
            directory_source_url: None,
            cache_ttl_secs: DEFAULT_TTL_SECS,
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let cache_ttl_secs = match env::var("CACHE_TTL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs >= 0 && Duration::try_seconds(*secs).is_some())
                .ok_or(ConfigError::Invalid("CACHE_TTL_SECS", raw))?,
            Err(_) => DEFAULT_TTL_SECS,
        };

        Ok(Self {
            data_csv: env::var("PRESENCE_DATA_CSV")
                .unwrap_or_else(|_| "runtime/data/sample_data.csv".to_string())
                .into(),
            data_xml: env::var("DIRECTORY_DATA_XML")
                .unwrap_or_else(|_| "runtime/data/sample_users.xml".to_string())
                .into(),
            directory_source_url: env::var("DIRECTORY_SOURCE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            cache_ttl_secs,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Presence cache staleness window.
    pub fn cache_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_seconds(self.cache_ttl_secs)
            .filter(|ttl| *ttl >= Duration::zero())
            .ok_or_else(|| {
                ConfigError::Invalid("CACHE_TTL_SECS", self.cache_ttl_secs.to_string())
            })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
