//! Run statistics: pure math over a finished run, kept apart from display so
//! it stays testable.

use std::time::Duration;

use crate::TaskResult;

/// Counts and timings tallied from one completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Results whose work function returned Ok.
    pub succeeded: usize,
    /// Results carrying an error.
    pub failed: usize,
    /// Sum of per-task elapsed times: total time workers spent inside the
    /// work function.
    pub busy: Duration,
    /// Wall time for the whole run.
    pub wall: Duration,
    /// Worker count the run used.
    pub num_workers: usize,
}

impl RunSummary {
    pub fn from_results<T, P>(
        results: &[TaskResult<T, P>],
        wall: Duration,
        num_workers: usize,
    ) -> Self {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        let busy = results.iter().map(|r| r.elapsed).sum();
        Self {
            succeeded,
            failed: results.len() - succeeded,
            busy,
            wall,
            num_workers,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// How much faster the run was than the same work on one thread:
    /// busy / wall. 1.0 means no overlap at all.
    pub fn speedup(&self) -> f64 {
        ratio(self.busy, self.wall)
    }

    /// Diagnostic only: fraction of total worker capacity spent inside the
    /// work function, busy / (wall x workers). A low value means workers sat
    /// idle waiting for tasks or for the collector, not that the run was
    /// wrong.
    pub fn utilization(&self) -> f64 {
        if self.num_workers == 0 {
            return 0.0;
        }
        self.speedup() / self.num_workers as f64
    }
}

fn ratio(num: Duration, den: Duration) -> f64 {
    let den_secs = den.as_secs_f64();
    if den_secs == 0.0 {
        0.0
    } else {
        num.as_secs_f64() / den_secs
    }
}
