// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday grouping of a user's presence and the per-weekday summaries
//! served by the API.

use crate::models::{StartEnd, UserPresence, WeekdayBuckets};
use crate::time_utils::{interval, mean, seconds_since_midnight, sum};
use chrono::{Datelike, Weekday};

/// Group presence durations (seconds, signed) by weekday.
pub fn group_by_weekday(dates: &UserPresence) -> WeekdayBuckets<Vec<i32>> {
    let mut buckets: WeekdayBuckets<Vec<i32>> = WeekdayBuckets::default();
    for (date, presence) in dates {
        buckets
            .get_mut(date.weekday())
            .push(interval(presence.start, presence.end));
    }
    buckets
}

/// Group start and end instants (seconds since midnight) by weekday.
pub fn group_start_end_by_weekday(dates: &UserPresence) -> WeekdayBuckets<StartEnd> {
    let mut buckets: WeekdayBuckets<StartEnd> = WeekdayBuckets::default();
    for (date, presence) in dates {
        let bucket = buckets.get_mut(date.weekday());
        bucket.start.push(seconds_since_midnight(presence.start));
        bucket.end.push(seconds_since_midnight(presence.end));
    }
    buckets
}

/// Mean presence duration per weekday, Monday first.
pub fn mean_presence_by_weekday(dates: &UserPresence) -> Vec<(Weekday, f64)> {
    group_by_weekday(dates)
        .iter()
        .map(|(weekday, durations)| (weekday, mean(durations)))
        .collect()
}

/// Total presence duration per weekday, Monday first.
pub fn total_presence_by_weekday(dates: &UserPresence) -> Vec<(Weekday, i64)> {
    group_by_weekday(dates)
        .iter()
        .map(|(weekday, durations)| (weekday, sum(durations)))
        .collect()
}

/// Mean start and mean end per weekday, Monday first.
pub fn mean_start_end_by_weekday(dates: &UserPresence) -> Vec<(Weekday, f64, f64)> {
    group_start_end_by_weekday(dates)
        .iter()
        .map(|(weekday, bucket)| (weekday, mean(&bucket.start), mean(&bucket.end)))
        .collect()
}
