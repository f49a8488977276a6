//! Core abstractions for habits.
//!
//! Calendar-day arithmetic and the clock that supplies "today".

mod clock;
pub mod date;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, LocalClock};
pub use date::{days_before, format_day, format_long, parse_day, window_ending};
