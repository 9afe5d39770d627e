//! Public types for the taskmill API and pool.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// Outcome of one task: the task itself, what the work function returned, and
/// how long the call took. Built exactly once per task, by the worker that ran
/// it, and never mutated afterwards.
#[derive(Debug)]
pub struct TaskResult<T, P> {
    /// The task this result belongs to. Moves in when the result is built.
    pub task: T,
    /// Work output, or the error recorded for this task. A per-task error
    /// lives here as data; it never aborts the run.
    pub outcome: std::result::Result<P, anyhow::Error>,
    /// Wall time spent inside the work function for this task.
    pub elapsed: Duration,
}

impl<T, P> TaskResult<T, P> {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The recorded error, when the work function failed for this task.
    pub fn error(&self) -> Option<&anyhow::Error> {
        self.outcome.as_ref().err()
    }
}

/// Options for [`run_tasks`](crate::run_tasks) and the pool builders.
#[derive(Clone, Debug, Default)]
pub struct PoolOpts {
    /// Override worker count. When None, derived from the machine's logical
    /// CPU count. `Some(0)` is rejected before any thread starts.
    pub num_workers: Option<usize>,
    /// Capacity of the task and result channels. 0 (the default) is a
    /// rendezvous handoff: every send blocks until the matching receive.
    pub channel_capacity: usize,
    /// Cooperative cancel flag. When raised, the source stops feeding new
    /// tasks; tasks already handed to a worker still produce their result.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// What a completed run hands back: every result plus the run-level counts.
#[derive(Debug)]
pub struct RunOutcome<T, P> {
    /// All results, in the order they arrived at the collector.
    pub results: Vec<TaskResult<T, P>>,
    /// Tasks the source submitted before exhaustion or cancel.
    pub submitted: usize,
    /// Worker count the pool actually ran with.
    pub num_workers: usize,
    /// Wall time from pool start to the last result collected.
    pub wall_time: Duration,
}
