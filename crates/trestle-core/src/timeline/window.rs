//! Auto-fit window calculation.

use jiff::ToSpan;

use crate::models::{end_of_day, start_of_day, TaskInterval, ViewWindow};

/// Days of empty axis kept after the last task.
pub const TRAILING_BUFFER_DAYS: i64 = 15;

/// Smallest window containing every task, from the start of the earliest
/// task's first day to the end of the latest task's last day plus
/// [`TRAILING_BUFFER_DAYS`].
///
/// Returns `None` for an empty task set so the caller keeps its current
/// window.
pub fn compute_window(tasks: &[TaskInterval]) -> Option<ViewWindow> {
    let earliest = tasks.iter().map(TaskInterval::start).min()?;
    let latest = tasks.iter().map(TaskInterval::end).max()?;

    let visible_start = start_of_day(earliest.date());
    let visible_end = end_of_day(latest.date())
        .checked_add(TRAILING_BUFFER_DAYS.days())
        .ok()?;
    ViewWindow::new(visible_start, visible_end).ok()
}
