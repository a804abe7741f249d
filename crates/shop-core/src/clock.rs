//! # Clock
//!
//! The discount-day rule depends on "today". Reading the wall clock inside
//! the pricing engine would make prices depend on when a test happens to run,
//! so the engine asks a [`Clock`] instead.
//!
//! ```text
//! PricingEngine ──► clock.today() ──► weekday == policy.discount_day ?
//!                      │
//!          ┌───────────┴───────────┐
//!     SystemClock              FixedClock
//!    (UTC calendar)       (tests, --today flag)
//! ```

use chrono::{NaiveDate, Utc};

/// A source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock; "today" is the current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_fixed_clock() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let clock = FixedClock::new(saturday);
        assert_eq!(clock.today(), saturday);
        assert_eq!(clock.today().weekday(), Weekday::Sat);
    }

    #[test]
    fn test_system_clock_reads_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
