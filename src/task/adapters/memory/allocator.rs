//! Sequential identifier allocation for the in-memory store.

use crate::task::domain::{ProjectId, TaskId};
use crate::task::ports::{TaskStoreError, TaskStoreResult};
use std::num::NonZeroU64;

/// Two independent counters issuing project and task identifiers.
///
/// Each sequence starts at 1 and increases by one per allocation. The
/// allocator lives inside the store state, so it is guarded by the same lock
/// as the entities it numbers.
#[derive(Debug, Default)]
pub(super) struct IdAllocator {
    last_project: u64,
    last_task: u64,
}

impl IdAllocator {
    pub(super) fn next_project_id(&mut self) -> TaskStoreResult<ProjectId> {
        advance(&mut self.last_project, "project").map(ProjectId::from_non_zero)
    }

    pub(super) fn next_task_id(&mut self) -> TaskStoreResult<TaskId> {
        advance(&mut self.last_task, "task").map(TaskId::from_non_zero)
    }
}

fn advance(last: &mut u64, sequence: &'static str) -> TaskStoreResult<NonZeroU64> {
    let next = NonZeroU64::MIN
        .checked_add(*last)
        .ok_or(TaskStoreError::IdentifiersExhausted(sequence))?;
    *last = next.get();
    Ok(next)
}
