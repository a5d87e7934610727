// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence CSV parsing.
//!
//! Rows are `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`. Rows with a different
//! field count (headers, footers) are skipped silently; rows with the right
//! shape but unparseable values are logged and skipped. Only failing to read
//! the source itself is an error.

use crate::models::{PresenceRecord, PresenceStore};
use chrono::{NaiveDate, NaiveTime, Timelike};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FIELD_COUNT: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// A producer of presence data.
pub trait PresenceSource: Send + Sync {
    fn fetch(&self) -> Result<Arc<PresenceStore>, PresenceError>;
}

/// Result of examining a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(PresenceRecord),
    Skipped(SkipReason),
}

/// Why a row did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a data row (header, footer, blank-ish line)
    FieldCount(usize),
    /// Data row with malformed values
    Invalid(RowError),
}

/// Row-level parse errors. These never abort parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid time: {0:?}")]
    InvalidTime(String),

    #[error("Unreadable row: {0}")]
    Unreadable(String),
}

/// Source-level errors. These abort the whole parse.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Failed to read presence data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read presence data: {0}")]
    Csv(#[from] csv::Error),
}

/// Classify one CSV row.
pub fn classify_row(row: &StringRecord) -> RowOutcome {
    if row.len() != FIELD_COUNT {
        return RowOutcome::Skipped(SkipReason::FieldCount(row.len()));
    }
    match parse_row(row) {
        Ok(record) => RowOutcome::Record(record),
        Err(e) => RowOutcome::Skipped(SkipReason::Invalid(e)),
    }
}

/// Parse a four-field row into a typed record.
fn parse_row(row: &StringRecord) -> Result<PresenceRecord, RowError> {
    let user_id = row[0]
        .trim()
        .parse::<i64>()
        .map_err(|_| RowError::InvalidUserId(row[0].to_string()))?;
    let date = NaiveDate::parse_from_str(&row[1], DATE_FORMAT)
        .map_err(|_| RowError::InvalidDate(row[1].to_string()))?;
    let start = parse_time(&row[2])?;
    let end = parse_time(&row[3])?;

    Ok(PresenceRecord {
        user_id,
        date,
        start,
        end,
    })
}

/// Parse a wall-clock time. `%S` admits a leap second (`:60`), which has
/// no place on a time card.
fn parse_time(field: &str) -> Result<NaiveTime, RowError> {
    NaiveTime::parse_from_str(field, TIME_FORMAT)
        .ok()
        .filter(|t| t.nanosecond() < 1_000_000_000)
        .ok_or_else(|| RowError::InvalidTime(field.to_string()))
}

/// Parse presence rows from any reader into a store.
///
/// I/O failures are fatal; everything else is skipped row by row.
pub fn parse_presence<R: Read>(reader: R) -> Result<PresenceStore, PresenceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = PresenceStore::new();
    let mut skipped = 0usize;

    for (index, row) in csv_reader.records().enumerate() {
        let outcome = match row {
            Ok(row) => classify_row(&row),
            Err(e) if e.is_io_error() => return Err(PresenceError::Csv(e)),
            Err(e) => RowOutcome::Skipped(SkipReason::Invalid(RowError::Unreadable(
                e.to_string(),
            ))),
        };

        match outcome {
            RowOutcome::Record(record) => {
                store.insert(record);
            }
            RowOutcome::Skipped(SkipReason::FieldCount(_)) => {}
            RowOutcome::Skipped(SkipReason::Invalid(error)) => {
                skipped += 1;
                tracing::debug!(row = index, error = %error, "Problem with presence row");
            }
        }
    }

    tracing::debug!(
        users = store.len(),
        records = store.record_count(),
        skipped,
        "Parsed presence data"
    );
    Ok(store)
}

/// Presence data read from a CSV file on every fetch.
#[derive(Debug, Clone)]
pub struct CsvPresenceSource {
    path: PathBuf,
}

impl CsvPresenceSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file.
    pub fn load(&self) -> Result<PresenceStore, PresenceError> {
        let file = File::open(&self.path).map_err(|source| PresenceError::Read {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "Loading presence data");
        parse_presence(file)
    }
}

impl PresenceSource for CsvPresenceSource {
    fn fetch(&self) -> Result<Arc<PresenceStore>, PresenceError> {
        self.load().map(Arc::new)
    }
}
