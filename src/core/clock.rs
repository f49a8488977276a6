//! Source of "today".
//!
//! Every statistic is anchored on a calendar day, and every mutation only
//! ever touches today's date. Commands take a [`Clock`] instead of reading
//! the wall clock directly so they can be exercised with a fixed day.

use chrono::{Local, NaiveDate};

/// Provides the current calendar day and timestamp.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's calendar date in the host's local time zone.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch, used to mint habit ids.
    fn now_millis(&self) -> i64;
}

/// Wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}
