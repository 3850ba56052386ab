//! Property tests for the timeline gestures.
//!
//! Random spans, drag deltas and edges are applied to a single-task
//! timeline; every gesture must either keep the task well-formed or leave
//! the timeline exactly as it was.

use jiff::{
    civil::{date, DateTime},
    SignedDuration,
};
use proptest::prelude::*;
use trestle_core::{
    models::{end_of_day, start_of_day, Edge, ResourceLane, TaskId, TaskInterval, ViewWindow},
    Timeline,
};

const ID: TaskId = TaskId::Server(1);

fn at(minutes: i64) -> DateTime {
    start_of_day(date(2025, 1, 1))
        .checked_add(SignedDuration::from_mins(minutes))
        .unwrap()
}

fn timeline_with(start: DateTime, end: DateTime) -> Timeline {
    let mut timeline = Timeline::new(ViewWindow::around(start));
    timeline.set_lanes(vec![
        ResourceLane::new(1, "Acme Concrete", "#4e79a7"),
        ResourceLane::new(2, "Bolt Electrical", "#f28e2b"),
    ]);
    timeline.replace_tasks(vec![TaskInterval::new(ID, 1, start, end, "Slab").unwrap()]);
    timeline
}

fn task(timeline: &Timeline) -> TaskInterval {
    timeline.task(ID).cloned().unwrap()
}

const YEAR: i64 = 365 * 24 * 60;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn move_preserves_duration(
        start in -YEAR..YEAR,
        length in 0i64..60 * 24 * 60,
        delta in -YEAR..YEAR,
        lane in 1u64..=2,
    ) {
        let mut timeline = timeline_with(at(start), at(start + length));
        let before = task(&timeline);

        timeline.move_task(ID, at(start + delta), lane).unwrap();
        let after = task(&timeline);

        prop_assert_eq!(
            after.end().duration_since(after.start()),
            before.end().duration_since(before.start())
        );
        prop_assert_eq!(after.start(), at(start + delta));
        prop_assert_eq!(after.lane_id, lane);
    }

    #[test]
    fn resize_keeps_order_or_changes_nothing(
        start in -YEAR..YEAR,
        length in 0i64..60 * 24 * 60,
        to in -YEAR..YEAR,
        move_start in any::<bool>(),
    ) {
        let mut timeline = timeline_with(at(start), at(start + length));
        let before = task(&timeline);
        let edge = if move_start { Edge::Start } else { Edge::End };

        match timeline.resize_task(ID, at(to), edge) {
            Ok(_) => {
                let after = task(&timeline);
                prop_assert!(after.start() <= after.end());
                match edge {
                    Edge::Start => prop_assert_eq!(after.end(), before.end()),
                    Edge::End => prop_assert_eq!(after.start(), before.start()),
                }
            }
            Err(_) => prop_assert_eq!(task(&timeline), before),
        }
    }

    #[test]
    fn split_is_contiguous_or_changes_nothing(
        first_day in -300i64..300,
        days in 0i64..60,
        offset in -10i64 * 24 * 60..70 * 24 * 60,
    ) {
        let start = start_of_day(at(first_day * 24 * 60).date());
        let end = end_of_day(at((first_day + days) * 24 * 60).date());
        let mut timeline = timeline_with(start, end);
        let before = timeline.tasks().to_vec();
        let split_at = start.checked_add(SignedDuration::from_mins(offset)).unwrap();

        match timeline.split_task(ID, split_at) {
            Ok(ops) => {
                prop_assert_eq!(ops.len(), 2);
                let tasks = timeline.tasks();
                prop_assert_eq!(tasks.len(), 2);
                let (first, second) = (&tasks[0], &tasks[1]);
                prop_assert_eq!(first.start(), start);
                prop_assert_eq!(first.end(), end_of_day(split_at.date()));
                prop_assert_eq!(second.start(), start_of_day(split_at.date().tomorrow().unwrap()));
                prop_assert_eq!(second.end(), end);
                prop_assert!(second.id.is_pending());
            }
            Err(_) => prop_assert_eq!(timeline.tasks(), before.as_slice()),
        }
    }
}
