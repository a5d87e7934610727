// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence statistics and user listing API.

use crate::error::{AppError, Result};
use crate::models::{DirectoryEntry, PresenceStore, UserPresence};
use crate::services::weekday::{
    mean_presence_by_weekday, mean_start_end_by_weekday, total_presence_by_weekday,
};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Presence API routes (public).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/users", get(get_users))
        .route("/api/v2/users", get(get_directory))
        .route(
            "/api/v1/mean_time_weekday/{user_id}",
            get(get_mean_time_weekday),
        )
        .route(
            "/api/v1/presence_weekday/{user_id}",
            get(get_presence_weekday),
        )
        .route(
            "/api/v1/presence_start_end/{user_id}",
            get(get_presence_start_end),
        )
}

/// Run file-backed work off the async runtime.
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(e.into()))?
}

async fn presence_store(state: &Arc<AppState>) -> Result<Arc<PresenceStore>> {
    let state = state.clone();
    run_blocking(move || Ok(state.presence.get()?)).await
}

/// Look up one user's presence; `None` if the user has no records.
async fn user_presence(state: &Arc<AppState>, user_id: i64) -> Result<Option<UserPresence>> {
    let store = presence_store(state).await?;
    let dates = store.user(user_id).cloned();
    if dates.is_none() {
        tracing::debug!(user_id, "User not found");
    }
    Ok(dates)
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Serialize, Debug, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: i64,
    pub name: String,
}

/// Users present in the presence data, for the dropdown.
async fn get_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>> {
    let store = presence_store(&state).await?;
    let users = store
        .user_ids()
        .map(|user_id| UserSummary {
            user_id,
            name: format!("User {}", user_id),
        })
        .collect();
    Ok(Json(users))
}

/// Users from the directory feed, with names and avatars.
async fn get_directory(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DirectoryEntry>>> {
    let entries = run_blocking(move || Ok(state.directory.load()?)).await?;
    Ok(Json(entries))
}

// ─── Weekday Statistics ──────────────────────────────────────

/// `["Mon", seconds]`
#[derive(Serialize, Debug, PartialEq)]
pub struct WeekdayMean(pub String, pub f64);

/// `["Mon", mean_start, mean_end]`
#[derive(Serialize, Debug, PartialEq)]
pub struct WeekdayStartEnd(pub String, pub f64, pub f64);

/// Chart rows: a header followed by `["Mon", seconds]` rows.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum PresenceRow {
    Header(&'static str, &'static str),
    Day(String, i64),
}

/// Mean presence time of a user grouped by weekday.
async fn get_mean_time_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<WeekdayMean>>> {
    let Some(dates) = user_presence(&state, user_id).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = mean_presence_by_weekday(&dates)
        .into_iter()
        .map(|(weekday, seconds)| WeekdayMean(weekday.to_string(), seconds))
        .collect();
    Ok(Json(rows))
}

/// Total presence time of a user grouped by weekday.
async fn get_presence_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<PresenceRow>>> {
    let Some(dates) = user_presence(&state, user_id).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = std::iter::once(PresenceRow::Header("Weekday", "Presence (s)"))
        .chain(
            total_presence_by_weekday(&dates)
                .into_iter()
                .map(|(weekday, seconds)| PresenceRow::Day(weekday.to_string(), seconds)),
        )
        .collect();
    Ok(Json(rows))
}

/// Mean start and end time of a user grouped by weekday.
async fn get_presence_start_end(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<WeekdayStartEnd>>> {
    let Some(dates) = user_presence(&state, user_id).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows = mean_start_end_by_weekday(&dates)
        .into_iter()
        .map(|(weekday, start, end)| WeekdayStartEnd(weekday.to_string(), start, end))
        .collect();
    Ok(Json(rows))
}
