//! Wall-clock access for date-relative queries and timestamp ids.
//!
//! Stores never call `chrono::Utc::now()` directly; they ask a [`Clock`],
//! so queries like "upcoming events" can be pinned to a reference instant.

use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Source of "now" for the stores.
pub trait Clock: Send + Sync + Debug {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of [`Clock::now`] in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Reads the wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Pins the clock to noon UTC of `today`.
    ///
    /// Events dated `today` start at midnight UTC, so they are already past.
    pub fn new(today: NaiveDate) -> Self {
        Self::at(today.and_time(NaiveTime::MIN).and_utc() + TimeDelta::hours(12))
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Hands out timestamp-derived ids that never repeat within one process.
///
/// Two requests in the same millisecond get consecutive values instead of a
/// duplicate.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: i64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, clock: &dyn Clock) -> i64 {
        let id = clock.now_millis().max(self.last + 1);
        self.last = id;
        id
    }
}
