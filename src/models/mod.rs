// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod directory;
pub mod presence;
pub mod weekday;

pub use directory::DirectoryEntry;
pub use presence::{Presence, PresenceRecord, PresenceStore, UserPresence};
pub use weekday::{StartEnd, WeekdayBuckets, WEEKDAYS};
