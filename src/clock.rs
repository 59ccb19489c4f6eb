//! Sources of "today" for weekday resolution.
//!
//! Weekdays are derived by stepping from a known date, so every computation
//! that needs one takes a [`Clock`] instead of reading the wall clock itself.

use chrono::{Datelike, Local};

use crate::{Date, Weekday};

/// The current date together with its weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Today {
    pub date: Date,
    pub weekday: Weekday,
}

/// Supplies the current date and weekday.
pub trait Clock {
    fn today(&self) -> Today;
}

impl<F> Clock for F
where
    F: Fn() -> Today,
{
    fn today(&self) -> Today {
        self()
    }
}

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    // chrono keeps month in 1..=12 and day in 1..=31
    #[allow(clippy::cast_possible_truncation)]
    fn today(&self) -> Today {
        let now = Local::now().date_naive();
        Today {
            date: Date::new(now.year(), now.month() as u8, now.day() as u8),
            weekday: Weekday::from_index(now.weekday().num_days_from_sunday() as u8),
        }
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(Today);

impl FixedClock {
    /// Creates a clock pinned to `date`, which the caller asserts falls on `weekday`
    pub const fn new(date: Date, weekday: Weekday) -> Self {
        Self(Today { date, weekday })
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Today {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_day() {
        let clock = FixedClock::new(Date::new(2018, 3, 28), Weekday::Wednesday);
        let today = clock.today();
        assert_eq!(today.date, Date::new(2018, 3, 28));
        assert_eq!(today.weekday, Weekday::Wednesday);
        assert_eq!(clock.today(), today);
    }

    #[test]
    fn test_system_clock_is_self_consistent() {
        let today = SystemClock.today();
        assert!(today.date.is_valid(), "system date {} is invalid", today.date);
        // Resolving today against itself returns the clock's weekday
        let pinned = FixedClock::new(today.date, today.weekday);
        assert_eq!(today.date.week(&pinned), today.weekday);
    }

    #[test]
    fn test_system_clock_weekday_agrees_with_fixed_anchor() {
        let today = SystemClock.today();
        let anchor = FixedClock::new(Date::new(2018, 3, 28), Weekday::Wednesday);
        assert_eq!(today.date.week(&anchor), today.weekday);
    }
}
