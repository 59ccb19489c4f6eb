/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = DECEMBER;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common (non-leap) year
pub const DAYS_PER_YEAR: i64 = 365;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Weekday names, indexed 0 (Sunday) through 6 (Saturday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Header row of the printed month calendar
pub const CALENDAR_HEADER: &str = "SUN\tMON\tTUE\tWED\tTHU\tFRI\tSAT";

/// Cell separator in the printed month calendar
pub const CALENDAR_CELL_SEPARATOR: char = '\t';

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
