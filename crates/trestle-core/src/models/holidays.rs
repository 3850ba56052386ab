//! Non-working days fetched from the calendar API.

use std::collections::BTreeSet;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Set of calendar dates marking non-working days.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HolidaySet(BTreeSet<Date>);

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `date` is a non-working day.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    pub fn insert(&mut self, date: Date) -> bool {
        self.0.insert(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Holidays falling within `[start, end]`, in calendar order.
    pub fn within(&self, start: Date, end: Date) -> impl Iterator<Item = Date> + '_ {
        let upper = if end < start { start } else { end };
        self.0
            .range(start..=upper)
            .copied()
            .filter(move |day| *day <= end)
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
