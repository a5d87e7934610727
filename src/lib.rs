// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Presence Analyzer: weekly attendance statistics
//!
//! This crate reads daily clock-in/clock-out records, caches them in memory,
//! and serves per-weekday presence statistics and the user directory as JSON.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{CsvPresenceSource, DirectoryService, PresenceCache};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub presence: PresenceCache<CsvPresenceSource>,
    pub directory: DirectoryService,
}

impl AppState {
    /// Wire the presence cache and directory service from configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let presence = PresenceCache::new(
            CsvPresenceSource::new(config.data_csv.clone()),
            config.cache_ttl()?,
        );
        let directory = DirectoryService::new(config.data_xml.clone())?;

        Ok(Self {
            config,
            presence,
            directory,
        })
    }
}
