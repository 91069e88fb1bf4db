//! Clock trait for injectable time.
//!
//! Services read "now" through a [`Clock`] so tests can pin the instant.
//! `SystemClock` is the production implementation.

use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freeze at `HH:MM` UTC on an arbitrary fixed date.
    ///
    /// Returns `None` if `time_of_day` is not a valid `HH:MM` time.
    pub fn at_time_of_day(time_of_day: &str) -> Option<Self> {
        let time = chrono::NaiveTime::parse_from_str(time_of_day, "%H:%M").ok()?;
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)?;
        Some(Self(date.and_time(time).and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as an `HH:MM` UTC time of day.
pub fn time_of_day(instant: &DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_time_of_day() {
        let clock = FixedClock::at_time_of_day("12:00").unwrap();
        assert_eq!(time_of_day(&clock.now()), "12:00");
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_fixed_clock_rejects_bad_time() {
        assert!(FixedClock::at_time_of_day("25:00").is_none());
        assert!(FixedClock::at_time_of_day("noon").is_none());
    }

    #[test]
    fn test_time_of_day_zero_padded() {
        let instant = DateTime::parse_from_rfc3339("2026-01-01T07:05:59Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(time_of_day(&instant), "07:05");
    }
}
