// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence records and the per-user store built from them.

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Clock-in and clock-out for a single day.
///
/// No ordering is enforced: `end` may precede `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One parsed row of the presence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceRecord {
    pub user_id: i64,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Date → presence for a single user.
pub type UserPresence = BTreeMap<NaiveDate, Presence>;

/// All presence data, keyed by user ID then date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceStore {
    users: BTreeMap<i64, UserPresence>,
}

impl PresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record for the same user and date.
    ///
    /// Returns the replaced presence, if any.
    pub fn insert(&mut self, record: PresenceRecord) -> Option<Presence> {
        self.users.entry(record.user_id).or_default().insert(
            record.date,
            Presence {
                start: record.start,
                end: record.end,
            },
        )
    }

    /// Presence entries for a user, or `None` if the user has no records.
    pub fn user(&self, user_id: i64) -> Option<&UserPresence> {
        self.users.get(&user_id)
    }

    /// User IDs in ascending order.
    pub fn user_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.users.keys().copied()
    }

    /// Number of users with at least one record.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Total number of (user, date) entries.
    pub fn record_count(&self) -> usize {
        self.users.values().map(BTreeMap::len).sum()
    }
}
