use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of leap years in `..=year`, offset so differences are exact for
/// any pair of years, negative ones included.
const fn leap_years_through(year: i64) -> i64 {
    year.div_euclid(LEAP_YEAR_CYCLE as i64) - year.div_euclid(CENTURY_CYCLE as i64)
        + year.div_euclid(GREGORIAN_CYCLE as i64)
}

/// Counts the leap years strictly between `earlier` and `later`.
pub const fn leap_years_between(earlier: i32, later: i32) -> i64 {
    let (earlier, later) = (earlier as i64, later as i64);
    if later - earlier <= 1 {
        return 0;
    }
    leap_years_through(later - 1) - leap_years_through(earlier)
}

/// Sum of the lengths of `months` in `year`.
pub fn days_in_months(year: i32, months: impl Iterator<Item = u8>) -> i64 {
    months.map(|m| i64::from(days_in_month(year, m))).sum()
}

/// 1-based ordinal of the day within its year.
pub fn day_of_year(year: i32, month: u8, day: u8) -> i64 {
    days_in_months(year, JANUARY..month) + i64::from(day)
}
