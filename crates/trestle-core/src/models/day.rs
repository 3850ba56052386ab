//! Day-granularity helpers shared by the models and the timeline.

use jiff::civil::{time, Date, DateTime, Time};

/// Last representable millisecond of a day.
pub const END_OF_DAY: Time = time(23, 59, 59, 999_000_000);

/// Midnight at the start of `date`.
pub fn start_of_day(date: Date) -> DateTime {
    date.to_datetime(Time::midnight())
}

/// Last millisecond of `date` (`23:59:59.999`).
pub fn end_of_day(date: Date) -> DateTime {
    date.to_datetime(END_OF_DAY)
}

/// Leniently parses a server or user supplied day.
///
/// Accepts `YYYY-MM-DD` optionally followed by a time component separated by
/// `T` or a space (`2024-11-06 08:00:00`); the time part is ignored. Returns
/// `None` for blank or malformed input.
pub fn parse_day(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let day = trimmed.split(['T', ' ']).next()?;
    if day.is_empty() {
        return None;
    }
    day.parse().ok()
}
