mod common;

use common::{create_test_session, MockApi};
use jiff::civil::date;
use trestle_core::{
    models::{end_of_day, start_of_day},
    MoveTask, NoticeLevel, ResizeTask, ShowSchedule, SplitTask, TaskId, TaskRef,
};

#[tokio::test]
async fn test_load_builds_lanes_tasks_and_holidays() {
    let session = create_test_session(MockApi::with_schedule()).await;
    let timeline = session.timeline();

    let lanes: Vec<_> = timeline.lanes().iter().map(|l| l.display_name.as_str()).collect();
    assert_eq!(lanes, vec!["Acme Concrete", "Bolt Electrical"]);
    assert_ne!(timeline.lanes()[0].color, timeline.lanes()[1].color);

    // Only header 1 is loaded.
    assert_eq!(timeline.tasks().len(), 2);
    assert!(timeline.task(TaskId::Server(12)).is_none());

    assert_eq!(timeline.window().start(), start_of_day(date(2024, 11, 4)));
    assert_eq!(timeline.window().end(), end_of_day(date(2024, 11, 28)));
    assert!(session.holidays().is_holiday(date(2024, 11, 7)));
}

#[tokio::test]
async fn test_calendar_failure_is_not_fatal() {
    let api = MockApi::with_schedule();
    api.with_state(|state| state.fail_calendar = true);
    let session = create_test_session(api).await;
    assert!(session.holidays().is_empty());
    assert_eq!(session.timeline().tasks().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_move_persists_and_duplicate_is_suppressed() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let params = MoveTask {
        id: 10,
        start: "2024-11-08".to_string(),
        lane: Some(2),
    };

    let outcome = session.move_task(&params).await;
    assert!(outcome.is_success(), "{outcome}");
    assert_eq!(outcome.level(), Some(NoticeLevel::Success));

    let moved = session.timeline().task(TaskId::Server(10)).unwrap();
    assert_eq!(moved.lane_id, 2);
    assert_eq!(moved.start(), start_of_day(date(2024, 11, 8)));
    assert_eq!(moved.end(), end_of_day(date(2024, 11, 15)));

    // Same drop again: nothing changes, nothing is sent.
    let outcome = session.move_task(&params).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.level(), Some(NoticeLevel::Info));

    session.api().with_state(|state| {
        assert_eq!(state.updates.len(), 1);
        let update = &state.updates[0];
        assert_eq!(update.id, 10);
        assert_eq!(update.lane_id, 2);
        assert_eq!(update.start_date, date(2024, 11, 8));
        assert_eq!(update.end_date, date(2024, 11, 15));
        assert_eq!(update.description, "Slab");
    });
}

#[tokio::test(start_paused = true)]
async fn test_move_is_resent_after_cooldown() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let params = MoveTask {
        id: 11,
        start: "2024-11-06".to_string(),
        lane: None,
    };

    session.move_task(&params).await;
    tokio::time::advance(session.settings().sync_cooldown()).await;
    let outcome = session.move_task(&params).await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Success));
    session.api().with_state(|state| assert_eq!(state.updates.len(), 2));
}

#[tokio::test]
async fn test_resize_end_persists() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let outcome = session
        .resize_task(&ResizeTask {
            id: 10,
            edge: "end".to_string(),
            to: "2024-11-20".to_string(),
        })
        .await;
    assert!(outcome.is_success(), "{outcome}");

    let task = session.timeline().task(TaskId::Server(10)).unwrap();
    assert_eq!(task.start(), start_of_day(date(2024, 11, 6)));
    assert_eq!(task.end(), end_of_day(date(2024, 11, 20)));
    session.api().with_state(|state| {
        assert_eq!(state.updates[0].end_date, date(2024, 11, 20));
    });
}

#[tokio::test]
async fn test_inverted_resize_is_a_warning_without_requests() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let outcome = session
        .resize_task(&ResizeTask {
            id: 10,
            edge: "start".to_string(),
            to: "2024-11-20".to_string(),
        })
        .await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Warning));
    assert!(outcome.tasks.is_empty());
    session.api().with_state(|state| assert!(state.updates.is_empty()));
}

#[tokio::test]
async fn test_split_creates_second_half_and_reloads() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let outcome = session
        .split_task(&SplitTask {
            id: 10,
            at: "2024-11-09".to_string(),
        })
        .await;
    assert!(outcome.is_success(), "{outcome}");

    session.api().with_state(|state| {
        assert_eq!(state.updates.len(), 1);
        assert_eq!(state.updates[0].end_date, date(2024, 11, 9));
        assert_eq!(state.creates.len(), 1);
        let create = &state.creates[0];
        assert_eq!(create.lane_id, 1);
        assert_eq!(create.start_date, date(2024, 11, 10));
        assert_eq!(create.end_date, date(2024, 11, 13));
        assert_eq!(create.header_id, 1);
        assert_eq!(create.created_by, "tester");
        assert_eq!(create.description, "Slab");
        // Initial load plus the reload after the create.
        assert_eq!(state.task_fetches, 2);
    });

    let timeline = session.timeline();
    assert_eq!(timeline.tasks().len(), 3);
    assert!(timeline.tasks().iter().all(|task| !task.id.is_pending()));
    let second = timeline.task(TaskId::Server(13)).unwrap();
    assert_eq!(second.start(), start_of_day(date(2024, 11, 10)));
    assert_eq!(second.end(), end_of_day(date(2024, 11, 13)));

    let reported: Vec<_> = outcome.tasks.iter().map(|task| task.id).collect();
    assert_eq!(reported, vec![TaskId::Server(10), TaskId::Server(13)]);
}

#[tokio::test]
async fn test_split_with_failed_create_keeps_local_half() {
    let api = MockApi::with_schedule();
    api.with_state(|state| state.fail_creates = true);
    let mut session = create_test_session(api).await;

    let outcome = session
        .split_task(&SplitTask {
            id: 10,
            at: "2024-11-09".to_string(),
        })
        .await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Error));
    assert!(!outcome.is_success());
    assert!(outcome.to_string().contains("partly saved"));

    // The first half was still saved and nothing was rolled back.
    let timeline = session.timeline();
    assert_eq!(timeline.tasks().len(), 3);
    assert_eq!(
        timeline.task(TaskId::Server(10)).unwrap().end(),
        end_of_day(date(2024, 11, 9))
    );
    assert!(timeline.tasks().iter().any(|task| task.id.is_pending()));
    session.api().with_state(|state| {
        assert_eq!(state.updates.len(), 1);
        assert_eq!(state.task_fetches, 1);
    });
}

#[tokio::test]
async fn test_split_with_failed_update_keeps_local_split() {
    let api = MockApi::with_schedule();
    api.with_state(|state| state.fail_updates = true);
    let mut session = create_test_session(api).await;

    let outcome = session
        .split_task(&SplitTask {
            id: 10,
            at: "2024-11-09".to_string(),
        })
        .await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Error));
    assert!(outcome.to_string().contains("partly saved"));

    // The create went through but no reload replaced the local split.
    session.api().with_state(|state| {
        assert_eq!(state.updates.len(), 1);
        assert_eq!(state.creates.len(), 1);
        assert_eq!(state.task_fetches, 1);
    });

    let timeline = session.timeline();
    assert_eq!(timeline.tasks().len(), 3);
    let first = timeline.task(TaskId::Server(10)).unwrap();
    assert_eq!(first.end(), end_of_day(date(2024, 11, 9)));
    let second = timeline
        .tasks()
        .iter()
        .find(|task| task.id.is_pending())
        .unwrap();
    assert_eq!(second.start(), start_of_day(date(2024, 11, 10)));
    assert_eq!(second.end(), end_of_day(date(2024, 11, 13)));

    // The reported tasks are the ones on the timeline.
    assert_eq!(outcome.tasks[0].end(), first.end());
    assert_eq!(outcome.tasks[1].id, second.id);
}

#[tokio::test]
async fn test_split_on_last_day_is_rejected() {
    let mut session = create_test_session(MockApi::with_schedule()).await;
    let outcome = session
        .split_task(&SplitTask {
            id: 10,
            at: "2024-11-13".to_string(),
        })
        .await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Warning));
    assert_eq!(session.timeline().tasks().len(), 2);
    session.api().with_state(|state| {
        assert!(state.updates.is_empty());
        assert!(state.creates.is_empty());
    });
}

#[tokio::test]
async fn test_failed_update_keeps_local_state_and_can_retry() {
    let api = MockApi::with_schedule();
    api.with_state(|state| state.fail_updates = true);
    let mut session = create_test_session(api).await;
    let params = MoveTask {
        id: 10,
        start: "2024-11-08".to_string(),
        lane: None,
    };

    let outcome = session.move_task(&params).await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Error));
    assert_eq!(
        session.timeline().task(TaskId::Server(10)).unwrap().start(),
        start_of_day(date(2024, 11, 8))
    );

    // A retry of the same state is not suppressed.
    session.api().with_state(|state| state.fail_updates = false);
    let outcome = session.move_task(&params).await;
    assert_eq!(outcome.level(), Some(NoticeLevel::Success));
    session.api().with_state(|state| assert_eq!(state.updates.len(), 2));
}

#[tokio::test]
async fn test_view_and_summary() {
    let session = create_test_session(MockApi::with_schedule()).await;

    let view = session
        .view(&ShowSchedule {
            lane: Some("1".to_string()),
        })
        .unwrap();
    assert_eq!(view.lanes.len(), 1);
    assert_eq!(view.tasks.len(), 1);
    assert!(session
        .view(&ShowSchedule {
            lane: Some("nobody".to_string()),
        })
        .is_err());

    let summary = session.summary(&TaskRef { id: 10 }).unwrap();
    assert_eq!(summary.lane.display_name, "Acme Concrete");
    assert_eq!(summary.days.total, 8);
    assert_eq!(summary.days.working, 7);
    assert_eq!(summary.days.off, 1);
    assert!(session.summary(&TaskRef { id: 404 }).is_err());
}
