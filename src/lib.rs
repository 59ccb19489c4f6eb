mod calendar;
mod clock;
mod consts;
mod gregorian;
mod prelude;
mod weekday;

pub use clock::{Clock, FixedClock, SystemClock, Today};
pub use consts::*;
pub use gregorian::{days_in_month, is_leap_year, leap_years_between};
pub use weekday::{Weekday, WeekdayError};

use crate::prelude::*;
use gregorian::{day_of_year, days_in_months};
use std::cmp::Ordering;
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
///
/// `Date::new` does not validate its fields; arithmetic on an impossible
/// date (month 13, February 30) yields meaningless results. Use
/// [`Date::try_new`] or parsing to reject such values up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Date {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl Date {
    /// Creates a date without validating month or day
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, validating month and day for the given year
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if month is outside 1-12, or
    /// `DateError::InvalidDay` if day is outside the month.
    pub const fn try_new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month < JANUARY || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether month and day fall inside the calendar
    pub const fn is_valid(&self) -> bool {
        self.month >= JANUARY
            && self.month <= MAX_MONTH
            && self.day >= MIN_DAY
            && self.day <= days_in_month(self.year, self.month)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Whether this date's year is a leap year
    pub const fn is_leap(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Three-way comparison on (year, month, day).
    ///
    /// `date.compare(&other) as i8` gives the -1 / 0 / 1 encoding.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Whole days between two dates, in either order.
    pub fn interval(&self, other: &Self) -> u64 {
        let (later, earlier) = match self.compare(other) {
            Ordering::Equal => return 0,
            Ordering::Greater => (self, other),
            Ordering::Less => (other, self),
        };

        let days = if later.year == earlier.year {
            later.ordinal() - earlier.ordinal()
        } else {
            let whole_years = i64::from(later.year) - i64::from(earlier.year) - 1;
            let mut days =
                whole_years * DAYS_PER_YEAR + leap_years_between(earlier.year, later.year);
            // rest of the earlier month, plus the days of the later month
            days += i64::from(earlier.days_in_month()) - i64::from(earlier.day)
                + i64::from(later.day);
            days += days_in_months(earlier.year, earlier.month.saturating_add(1)..=DECEMBER);
            days += days_in_months(later.year, JANUARY..later.month);
            days
        };

        tracing::trace!(%earlier, %later, days, "computed interval");
        days.unsigned_abs()
    }

    fn ordinal(&self) -> i64 {
        day_of_year(self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // A leading separator is the sign of the year
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let invalid = || DateError::InvalidFormat(trimmed.to_owned());
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;

        Self::try_new(if negative { -year } else { year }, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
