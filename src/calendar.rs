//! Month calendar printer.
//!
//! Renders a tab-separated grid under a `SUN`..`SAT` header:
//!
//! ```text
//! SUN	MON	TUE	WED	THU	FRI	SAT
//! 				1	2	3
//! 4	5	6	7	8	9	10
//! ...
//! ```

use std::io::{self, Write};

use crate::{
    CALENDAR_CELL_SEPARATOR, CALENDAR_HEADER, Clock, DAYS_PER_WEEK, Date, MIN_DAY,
};

impl Date {
    /// Writes the calendar of this date's month to `out`.
    ///
    /// The first day is placed under its weekday as resolved by `clock`.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn print_calendar<C, W>(&self, clock: &C, out: &mut W) -> io::Result<()>
    where
        C: Clock + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out, "{CALENDAR_HEADER}")?;

        let first = Self::new(self.year(), self.month(), MIN_DAY);
        let mut pos = first.week(clock).index();
        for _ in 0..pos {
            write!(out, "{CALENDAR_CELL_SEPARATOR}")?;
        }

        let last = self.days_in_month();
        for day in MIN_DAY..=last {
            write!(out, "{day}{CALENDAR_CELL_SEPARATOR}")?;
            pos += 1;
            if pos == DAYS_PER_WEEK {
                pos = 0;
                writeln!(out)?;
            }
        }
        // Trailing blank line after the grid
        write!(out, "\n\n")?;

        tracing::debug!(year = self.year(), month = self.month(), days = last, "printed calendar");
        Ok(())
    }

    /// Writes the calendar of this date's month to standard output.
    ///
    /// # Errors
    /// Returns any error raised while writing to standard output.
    pub fn print_calendar_stdout<C: Clock + ?Sized>(&self, clock: &C) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_calendar(clock, &mut lock)?;
        lock.flush()
    }

    /// Renders the calendar of this date's month to a string.
    pub fn calendar<C: Clock + ?Sized>(&self, clock: &C) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> cannot fail
        let _ = self.print_calendar(clock, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, Weekday};

    fn clock() -> FixedClock {
        FixedClock::new(Date::new(2018, 3, 28), Weekday::Wednesday)
    }

    #[test]
    fn test_march_2018_grid() {
        let text = Date::new(2018, 3, 1).calendar(&clock());
        let expected = "SUN\tMON\tTUE\tWED\tTHU\tFRI\tSAT\n\
                        \t\t\t\t1\t2\t3\t\n\
                        4\t5\t6\t7\t8\t9\t10\t\n\
                        11\t12\t13\t14\t15\t16\t17\t\n\
                        18\t19\t20\t21\t22\t23\t24\t\n\
                        25\t26\t27\t28\t29\t30\t31\t\n\
                        \n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_first_row_leading_blanks() {
        let text = Date::new(2018, 3, 28).calendar(&clock());
        let first_row = text.lines().nth(1).unwrap();
        let blanks = first_row.chars().take_while(|c| *c == '\t').count();
        assert_eq!(blanks, 4);
        assert!(first_row[blanks..].starts_with("1\t"));
    }

    #[test]
    fn test_rows_wrap_every_seven_cells() {
        let text = Date::new(2018, 4, 30).calendar(&clock());
        let rows: Vec<&str> = text.lines().skip(1).filter(|l| !l.is_empty()).collect();
        // April 2018 starts on Sunday: 30 days over five rows
        assert_eq!(rows.len(), 5);
        for row in &rows[..rows.len() - 1] {
            assert_eq!(row.matches('\t').count(), 7, "row {row:?}");
        }
        assert_eq!(*rows.last().unwrap(), "29\t30\t");
        assert!(text.ends_with("29\t30\t\n\n"));
    }

    #[test]
    fn test_last_day_matches_month_length() {
        let cases = [
            (Date::new(2018, 3, 1), 31),
            (Date::new(1996, 2, 29), 29),
            (Date::new(1997, 2, 28), 28),
            (Date::new(2030, 3, 28), 31),
        ];
        for (date, last) in cases {
            let text = date.calendar(&clock());
            let printed = text
                .split(CALENDAR_CELL_SEPARATOR)
                .filter_map(|cell| cell.trim().parse::<u8>().ok())
                .max();
            assert_eq!(printed, Some(last), "calendar of {date}");
        }
    }

    #[test]
    fn test_leap_february_grid() {
        // February 1996 starts on Thursday
        let text = Date::new(1996, 2, 10).calendar(&clock());
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], CALENDAR_HEADER);
        assert_eq!(rows[1], "\t\t\t\t1\t2\t3\t");
        assert_eq!(rows[5], "25\t26\t27\t28\t29\t");
    }

    #[test]
    fn test_print_calendar_propagates_writer_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = Date::new(2018, 3, 1).print_calendar(&clock(), &mut Broken);
        assert!(result.is_err());
    }
}
