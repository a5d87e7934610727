// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-of-day arithmetic and numeric folds shared by the aggregators.

use chrono::{NaiveTime, Timelike};

/// Seconds elapsed since midnight for a time of day.
pub fn seconds_since_midnight(time: NaiveTime) -> i32 {
    (time.hour() * 3600 + time.minute() * 60 + time.second()) as i32
}

/// Signed interval in seconds between two times of day.
///
/// Negative when `end` precedes `start`; the value is not clamped.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i32 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean<T>(values: &[T]) -> f64
where
    T: Copy,
    f64: From<T>,
{
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().map(|&v| f64::from(v)).sum();
    total / values.len() as f64
}

/// Sum of second counts, widened so long histories cannot overflow.
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
