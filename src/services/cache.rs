// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-through cache for presence data.
//!
//! A single mutex covers the whole check-and-refresh sequence, so concurrent
//! callers never trigger overlapping reloads of the underlying source.

use crate::models::PresenceStore;
use crate::services::parser::{PresenceError, PresenceSource};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// Default staleness window.
pub const DEFAULT_TTL_SECS: i64 = 600;

#[derive(Debug)]
struct CacheEntry {
    created_at: DateTime<Utc>,
    payload: Arc<PresenceStore>,
}

/// Time-bounded cache around a [`PresenceSource`].
pub struct PresenceCache<S> {
    source: S,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl<S: PresenceSource> PresenceCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Cache with the default 600 second staleness window.
    pub fn with_default_ttl(source: S) -> Self {
        Self::new(source, Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return cached data, refreshing from the source if there is none or it
    /// is older than the staleness window as of `now`.
    ///
    /// An entry stamped after `now` (the clock went backwards) counts as
    /// stale. A failed refresh leaves the existing entry in place.
    pub fn get_at(&self, now: DateTime<Utc>) -> Result<Arc<PresenceStore>, PresenceError> {
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = entry.as_ref() {
            let age = now - cached.created_at;
            if age >= Duration::zero() && age <= self.ttl {
                return Ok(cached.payload.clone());
            }
            tracing::debug!(age_secs = age.num_seconds(), "Presence cache expired");
        }

        let payload = self.source.fetch()?;
        *entry = Some(CacheEntry {
            created_at: now,
            payload: payload.clone(),
        });
        tracing::info!(users = payload.len(), "Presence cache refreshed");
        Ok(payload)
    }

    pub fn get(&self) -> Result<Arc<PresenceStore>, PresenceError> {
        self.get_at(Utc::now())
    }

    /// Drop the cached entry so the next access reloads from the source.
    pub fn invalidate(&self) {
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        if entry.take().is_some() {
            tracing::info!("Presence cache invalidated");
        }
    }
}

impl<S: PresenceSource> PresenceSource for PresenceCache<S> {
    fn fetch(&self) -> Result<Arc<PresenceStore>, PresenceError> {
        self.get()
    }
}
