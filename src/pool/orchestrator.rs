//! Pool orchestration: spawn the full pipeline and gather its output.
//! Source → task channel → workers → result channel → collector, with the
//! coordinator closing the result channel after the last worker exits.

use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread::JoinHandle;

use crate::pool::collector::spawn_collector_thread;
use crate::pool::context::{PoolRunResult, create_pool_channels, resolve_num_workers};
use crate::pool::coordinator::spawn_coordinator_thread;
use crate::pool::source::spawn_source_thread;
use crate::pool::worker::spawn_workers;
use crate::{PoolOpts, TaskResult};

/// Handles returned by [`run_pool`] for a live run: join `collector_handle`
/// for the results, `source_handle` for the submitted count, and
/// `coordinator_handle` for worker panic accounting.
pub struct PoolHandles<T, P> {
    pub collector_handle: JoinHandle<Vec<TaskResult<T, P>>>,
    pub source_handle: JoinHandle<usize>,
    pub coordinator_handle: JoinHandle<usize>,
    pub num_workers: usize,
}

/// Start the pool: N workers plus the source, collector, and coordinator
/// threads, wired through the two bounded channels. Fails on a zero worker
/// count before any thread is spawned; that is the only construction error.
pub fn run_pool<T, P, I, W, F>(
    tasks: I,
    work: W,
    opts: &PoolOpts,
    on_result: Option<F>,
) -> Result<PoolHandles<T, P>>
where
    T: Send + 'static,
    P: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
    W: Fn(&T) -> Result<P> + Send + Sync + 'static,
    F: FnMut(&TaskResult<T, P>) + Send + 'static,
{
    let num_workers = resolve_num_workers(opts)?;
    let channels = create_pool_channels::<T, P>(opts.channel_capacity);
    let work = Arc::new(work);
    let cancel: Option<Arc<AtomicBool>> = opts.cancel.as_ref().map(Arc::clone);

    let source_handle = spawn_source_thread(channels.task_tx, tasks, cancel);
    let worker_handles = spawn_workers(channels.task_rx, &channels.result_tx, work, num_workers);
    let collector_handle = spawn_collector_thread(channels.result_rx, on_result);

    // The coordinator takes the last remaining result sender; the channel
    // closes when it drops it after joining every worker.
    let coordinator_handle = spawn_coordinator_thread(worker_handles, channels.result_tx);

    Ok(PoolHandles {
        collector_handle,
        source_handle,
        coordinator_handle,
        num_workers,
    })
}

/// Drain a started pool to completion: results from the collector, submitted
/// count from the source, panic check from the coordinator. A worker panic
/// breaks the one-result-per-task contract, so it surfaces as an error here
/// rather than as a short collection.
pub fn collect_results<T, P>(handles: PoolHandles<T, P>) -> Result<PoolRunResult<T, P>> {
    let results = handles
        .collector_handle
        .join()
        .map_err(|_| anyhow::anyhow!("collector thread panicked"))?;
    let submitted = handles
        .source_handle
        .join()
        .map_err(|_| anyhow::anyhow!("source thread panicked"))?;
    let panicked = handles
        .coordinator_handle
        .join()
        .map_err(|_| anyhow::anyhow!("coordinator thread panicked"))?;
    if panicked > 0 {
        return Err(anyhow::anyhow!("{} worker thread(s) panicked", panicked));
    }

    Ok((results, submitted))
}
