//! Visible time window of the timeline.

use jiff::{civil::DateTime, ToSpan};
use serde::Serialize;

use super::day::{end_of_day, start_of_day};
use crate::error::{Result, TimelineError};

/// Half of the default window width, in days.
const DEFAULT_HALF_WIDTH_DAYS: i64 = 7;

/// Bounds of the rendered time axis. `start < end` always holds.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ViewWindow {
    start: DateTime,
    end: DateTime,
}

impl ViewWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidInput` unless `start < end`.
    pub fn new(start: DateTime, end: DateTime) -> Result<Self> {
        if start >= end {
            return Err(TimelineError::invalid_input("window")
                .with_reason(format!("window start {start} must precede its end {end}")));
        }
        Ok(Self { start, end })
    }

    /// Narrow window of two weeks centered on `now`, used before any task
    /// has been loaded.
    pub fn around(now: DateTime) -> Self {
        let today = now.date();
        let first = today
            .checked_sub(DEFAULT_HALF_WIDTH_DAYS.days())
            .unwrap_or(today);
        let last = today
            .checked_add(DEFAULT_HALF_WIDTH_DAYS.days())
            .unwrap_or(today);
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    /// Default window centered on the current local time.
    pub fn around_now() -> Self {
        Self::around(jiff::Zoned::now().datetime())
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    /// Whether any part of `[start, end]` is visible.
    pub fn overlaps(&self, start: DateTime, end: DateTime) -> bool {
        start <= self.end && end >= self.start
    }
}
