// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory loading from the intranet XML feed.

use crate::models::DirectoryEntry;
use icu_collator::CollatorOptions;
use icu_locid::{locale, Locale};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// String ordering used to sort directory names.
pub trait NameCollator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Locale-tailored collation (CLDR data compiled into the binary).
///
/// The directory uses Polish: letters with diacritics are letters of their
/// own, so "Ćwik" sorts after every "C…" name and "Łukasz" after every "L…".
pub struct LocaleCollator {
    inner: icu_collator::Collator,
}

impl LocaleCollator {
    pub fn try_new(locale: &Locale) -> Result<Self, DirectoryError> {
        let inner = icu_collator::Collator::try_new(&locale.into(), CollatorOptions::new())
            .map_err(|e| DirectoryError::Collator(format!("{}: {}", locale, e)))?;
        Ok(Self { inner })
    }

    pub fn polish() -> Result<Self, DirectoryError> {
        Self::try_new(&locale!("pl"))
    }
}

impl NameCollator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b)
    }
}

/// Plain codepoint ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodepointCollator;

impl NameCollator for CodepointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

// ─── XML document shape ──────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DirectoryDocument {
    server: ServerDescriptor,
    #[serde(default)]
    users: UserList,
}

#[derive(Debug, Deserialize)]
struct ServerDescriptor {
    protocol: String,
    host: String,
}

#[derive(Debug, Default, Deserialize)]
struct UserList {
    #[serde(rename = "user", default)]
    users: Vec<UserDescriptor>,
}

#[derive(Debug, Deserialize)]
struct UserDescriptor {
    #[serde(rename = "@id")]
    id: i64,
    name: String,
    avatar: String,
}

/// Parse a directory document and sort the users by name.
pub fn parse_directory(
    xml: &str,
    collator: &dyn NameCollator,
) -> Result<Vec<DirectoryEntry>, DirectoryError> {
    let document: DirectoryDocument =
        quick_xml::de::from_str(xml).map_err(|e| DirectoryError::Parse(e.to_string()))?;

    let base_url = format!(
        "{}://{}",
        document.server.protocol.trim(),
        document.server.host.trim()
    );

    let mut entries: Vec<DirectoryEntry> = document
        .users
        .users
        .into_iter()
        .map(|user| DirectoryEntry {
            id: user.id,
            avatar: format!("{}{}", base_url, user.avatar.trim()),
            name: user.name,
        })
        .collect();

    entries.sort_by(|a, b| collator.compare(&a.name, &b.name));
    Ok(entries)
}

/// Service for reading (and refreshing) the local directory document.
#[derive(Clone)]
pub struct DirectoryService {
    path: PathBuf,
    collator: Arc<dyn NameCollator>,
}

impl DirectoryService {
    /// Directory backed by `path`, sorted with Polish collation.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self, DirectoryError> {
        Ok(Self::with_collator(path, Arc::new(LocaleCollator::polish()?)))
    }

    pub fn with_collator<P: Into<PathBuf>>(path: P, collator: Arc<dyn NameCollator>) -> Self {
        Self {
            path: path.into(),
            collator,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document and return its users. Not cached.
    pub fn load(&self) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        let xml = fs::read_to_string(&self.path).map_err(|e| DirectoryError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let entries = parse_directory(&xml, self.collator.as_ref())?;
        tracing::debug!(count = entries.len(), "Loaded user directory");
        Ok(entries)
    }

    /// Download a fresh document and replace the local file.
    ///
    /// The download must parse before anything is written, so a bad response
    /// never clobbers a working file.
    pub async fn refresh_from_url(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> Result<usize, DirectoryError> {
        tracing::info!(url, "Downloading user directory");

        let body = client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| DirectoryError::Download(e.to_string()))?
            .text()
            .await
            .map_err(|e| DirectoryError::Download(e.to_string()))?;

        let count = parse_directory(&body, &CodepointCollator)?.len();

        tokio::fs::write(&self.path, body.as_bytes())
            .await
            .map_err(|e| DirectoryError::Io {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::info!(count, path = %self.path.display(), "User directory updated");
        Ok(count)
    }
}

/// Errors from directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to access directory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse directory XML: {0}")]
    Parse(String),

    #[error("Failed to download directory: {0}")]
    Download(String),

    #[error("Collation data unavailable for {0}")]
    Collator(String),
}
