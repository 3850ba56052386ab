//! Date formatting for task bars and windows.

use std::fmt;

use jiff::civil::DateTime;

use crate::models::{day::END_OF_DAY, start_of_day};

/// Formats an instant as a bare `YYYY-MM-DD` when it sits on a day boundary
/// (midnight or the last millisecond), and as `YYYY-MM-DD HH:MM` otherwise.
pub struct DayLabel(pub DateTime);

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instant = self.0;
        if instant == start_of_day(instant.date()) || instant.time() == END_OF_DAY {
            write!(f, "{}", instant.date())
        } else {
            write!(f, "{}", instant.strftime("%Y-%m-%d %H:%M"))
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::end_of_day;

    #[test]
    fn test_day_boundaries_print_as_dates() {
        let day = date(2024, 11, 6);
        assert_eq!(DayLabel(start_of_day(day)).to_string(), "2024-11-06");
        assert_eq!(DayLabel(end_of_day(day)).to_string(), "2024-11-06");
        assert_eq!(DayLabel(day.at(6, 30, 0, 0)).to_string(), "2024-11-06 06:30");
    }
}
