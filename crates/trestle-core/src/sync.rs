//! Server sync with de-duplication of redundant writes.
//!
//! A burst of drag events for the same task usually resolves to the same
//! final position. The coordinator remembers the key `(id, start, end)` of
//! the last update it sent and suppresses an identical update issued within
//! the cooldown. Once the cooldown has passed, the same state may be sent
//! again. A failed write frees the slot so a retry is not swallowed.
//!
//! The key carries no lane or label, so a matching key alone is not enough
//! to suppress: the body that would be sent must also equal the last one.
//! A lane-only move within the cooldown therefore still goes out.

use std::time::Duration;

use jiff::civil::DateTime;
use log::{debug, info, warn};
use tokio::time::Instant;

use crate::{
    api::ScheduleApi,
    error::Result,
    models::{TaskCreate, TaskInterval, TaskUpdate},
};

/// Cooldown applied when none is configured.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Identity of a synced task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncKey {
    pub id: u64,
    pub start: DateTime,
    pub end: DateTime,
}

/// What happened to an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// The request went out and the server accepted it
    Sent,

    /// Identical to the previous request within the cooldown; nothing sent
    Suppressed,
}

#[derive(Debug, Clone)]
struct LastSync {
    key: SyncKey,
    update: TaskUpdate,
    sent_at: Instant,
}

/// Single-slot de-duplicating writer, scoped to one timeline session.
#[derive(Debug, Clone)]
pub struct SyncCoordinator {
    cooldown: Duration,
    last: Option<LastSync>,
}

impl SyncCoordinator {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Key of the last sent update, if it is still within the cooldown.
    pub fn last_key(&self) -> Option<SyncKey> {
        self.recent().map(|last| last.key)
    }

    fn recent(&self) -> Option<&LastSync> {
        self.last
            .as_ref()
            .filter(|last| last.sent_at.elapsed() < self.cooldown)
    }

    /// Persists the current state of `task`, unless the previous update had
    /// the same key and body and the cooldown has not elapsed.
    ///
    /// # Errors
    ///
    /// - `NotPersisted` if the task has no server ID
    /// - `Http` / `Rejected` if the write failed; local state is not touched
    pub async fn sync_update<A: ScheduleApi>(
        &mut self,
        api: &A,
        task: &TaskInterval,
    ) -> Result<SyncStatus> {
        let update = TaskUpdate::try_from(task)?;
        let key = SyncKey {
            id: update.id,
            start: task.start(),
            end: task.end(),
        };

        if self
            .recent()
            .is_some_and(|last| last.key == key && last.update == update)
        {
            debug!("Suppressing duplicate update of task {}", key.id);
            return Ok(SyncStatus::Suppressed);
        }

        self.last = Some(LastSync {
            key,
            update: update.clone(),
            sent_at: Instant::now(),
        });
        match api.update_task(&update).await {
            Ok(()) => {
                info!(
                    "Updated task {} ({} .. {}, lane {})",
                    update.id, update.start_date, update.end_date, update.lane_id
                );
                Ok(SyncStatus::Sent)
            }
            Err(e) => {
                warn!("Update of task {} failed: {e}", update.id);
                if self.last.as_ref().is_some_and(|last| last.key == key) {
                    self.last = None;
                }
                Err(e)
            }
        }
    }

    /// Creates `task` on the server. Creates are never de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns `Http` / `Rejected` if the write failed.
    pub async fn create<A: ScheduleApi>(
        &self,
        api: &A,
        task: &TaskInterval,
        header_id: u64,
        created_by: &str,
    ) -> Result<()> {
        let create = TaskCreate::new(task, header_id, created_by);
        api.create_task(&create)
            .await
            .inspect(|()| {
                info!(
                    "Created task on lane {} ({} .. {})",
                    create.lane_id, create.start_date, create.end_date
                );
            })
            .inspect_err(|e| warn!("Creation of task on lane {} failed: {e}", create.lane_id))
    }
}

impl Default for SyncCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
