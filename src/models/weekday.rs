// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed seven-slot weekday buckets (Monday first).

use chrono::Weekday;

/// All weekdays, Monday first, matching bucket indices 0..=6.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One bucket per weekday. Every weekday is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBuckets<T> {
    buckets: [T; 7],
}

impl<T: Default> Default for WeekdayBuckets<T> {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T> WeekdayBuckets<T> {
    pub fn get(&self, weekday: Weekday) -> &T {
        &self.buckets[weekday.num_days_from_monday() as usize]
    }

    pub fn get_mut(&mut self, weekday: Weekday) -> &mut T {
        &mut self.buckets[weekday.num_days_from_monday() as usize]
    }

    /// Iterate buckets in weekday order, Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        WEEKDAYS.into_iter().zip(self.buckets.iter())
    }
}

/// Start and end instants (seconds since midnight) collected for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEnd {
    pub start: Vec<i32>,
    pub end: Vec<i32>,
}
