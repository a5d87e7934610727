// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod cache;
pub mod directory;
pub mod parser;
pub mod weekday;

pub use cache::PresenceCache;
pub use directory::{
    CodepointCollator, DirectoryError, DirectoryService, LocaleCollator, NameCollator,
};
pub use parser::{CsvPresenceSource, PresenceError, PresenceSource};
