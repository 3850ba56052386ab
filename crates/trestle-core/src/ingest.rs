//! Conversion of raw API rows into timeline models.
//!
//! Rows that cannot be turned into a valid model (missing keys, unparseable
//! dates, end before start) are skipped with a debug log line rather than
//! failing the whole load.

use log::debug;

use crate::{
    models::{
        end_of_day, start_of_day, CalendarRecord, ContractorRecord, HolidaySet, ResourceLane,
        TaskId, TaskInterval, TaskRecord,
    },
    timeline::ColorRegistry,
};

/// Task intervals of schedule header `header_id`.
///
/// Starts are snapped to the beginning of their day and ends to the last
/// millisecond of their day, so a one-day task covers that whole day.
pub fn parse_tasks(records: &[TaskRecord], header_id: u64) -> Vec<TaskInterval> {
    records
        .iter()
        .filter(|record| record.header_id() == Some(header_id))
        .filter_map(|record| {
            let (Some(id), Some(lane_id), Some(start), Some(end)) = (
                record.id(),
                record.lane_id(),
                record.start_date(),
                record.end_date(),
            ) else {
                debug!("Skipping incomplete task row {record:?}");
                return None;
            };
            let label = record
                .description()
                .map_or_else(|| format!("Task {id}"), str::to_string);

            TaskInterval::new(
                TaskId::Server(id),
                lane_id,
                start_of_day(start),
                end_of_day(end),
                label,
            )
            .inspect_err(|e| debug!("Skipping task {id}: {e}"))
            .ok()
        })
        .collect()
}

/// Contractor lanes in server order, each with its registry color.
pub fn parse_lanes(records: &[ContractorRecord], colors: &mut ColorRegistry) -> Vec<ResourceLane> {
    records
        .iter()
        .filter_map(|record| {
            let Some(id) = record.id() else {
                debug!("Skipping contractor row without ID {record:?}");
                return None;
            };
            let name = record
                .name()
                .filter(|name| !name.is_empty())
                .map_or_else(|| format!("Contractor {id}"), str::to_string);
            Some(ResourceLane::new(id, name, colors.color_for(id)))
        })
        .collect()
}

/// Days the calendar marks as holidays.
pub fn parse_holidays(records: &[CalendarRecord]) -> HolidaySet {
    records
        .iter()
        .filter(|record| record.is_holiday())
        .filter_map(CalendarRecord::day)
        .collect()
}
