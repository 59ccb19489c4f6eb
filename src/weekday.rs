use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Clock, DAYS_PER_WEEK, Date, WEEKDAY_NAMES, prelude::*};

/// A day of the week, indexed 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

/// Error returned when a weekday name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekdayError {
    #[error("Unknown weekday name: {0}")]
    UnknownName(String),
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for `index`, wrapping modulo 7.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    /// Returns the index of this weekday (Sunday = 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this weekday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl FromStr for Weekday {
    type Err = WeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        WEEKDAY_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| Self::ALL[index])
            .ok_or_else(|| WeekdayError::UnknownName(s.to_owned()))
    }
}

impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Date {
    /// Resolves the weekday of this date by stepping from the clock's today.
    pub fn week<C: Clock + ?Sized>(&self, clock: &C) -> Weekday {
        let today = clock.today();
        // Bounded by 7, so the narrowing cast cannot truncate.
        #[allow(clippy::cast_possible_truncation)]
        let shift = (self.interval(&today.date) % u64::from(DAYS_PER_WEEK)) as u8;
        let anchor = today.weekday.index();

        let weekday = match self.compare(&today.date) {
            Ordering::Equal => today.weekday,
            Ordering::Greater => Weekday::from_index(anchor + shift),
            Ordering::Less => Weekday::from_index(anchor + DAYS_PER_WEEK - shift),
        };
        tracing::debug!(date = %self, today = %today.date, %weekday, "resolved weekday");
        weekday
    }
}
