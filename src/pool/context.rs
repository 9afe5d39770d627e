//! Pool plumbing shared by one run: the two typed channels and worker-count
//! resolution. Built once before any thread is spawned.

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, bounded};

use crate::{PoolOpts, TaskResult};

/// Result of [`collect_results`](crate::pool::collect_results): (results, submitted_count).
pub type PoolRunResult<T, P> = (Vec<TaskResult<T, P>>, usize);

/// Channels for one pool run. The source takes task_tx; every worker gets a
/// clone of task_rx and result_tx; the collector takes result_rx; the
/// coordinator keeps the original result_tx and drops it after the last
/// worker exits.
pub struct PoolChannels<T, P> {
    pub task_tx: Sender<T>,
    pub task_rx: Receiver<T>,
    pub result_tx: Sender<TaskResult<T, P>>,
    pub result_rx: Receiver<TaskResult<T, P>>,
}

/// Create both pool channels with the same capacity. Capacity 0 gives the
/// rendezvous handoff: a send completes only when a receiver takes the value,
/// so a fast source or worker is held back instead of buffering unboundedly.
pub fn create_pool_channels<T, P>(channel_capacity: usize) -> PoolChannels<T, P> {
    let (task_tx, task_rx) = bounded::<T>(channel_capacity);
    let (result_tx, result_rx) = bounded::<TaskResult<T, P>>(channel_capacity);

    PoolChannels {
        task_tx,
        task_rx,
        result_tx,
        result_rx,
    }
}

/// Resolve the worker count from opts. `None` uses the machine's logical CPU
/// count; an explicit 0 is a configuration error, reported before any thread
/// is spawned.
pub fn resolve_num_workers(opts: &PoolOpts) -> Result<usize> {
    match opts.num_workers {
        Some(0) => Err(anyhow::anyhow!("num_workers must be at least 1")),
        Some(n) => Ok(n),
        None => Ok(num_cpus::get()),
    }
}
