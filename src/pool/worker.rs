//! Workers: N identical threads that pull tasks, run the work function, and
//! emit exactly one result per task.

use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::TaskResult;

/// Single worker: receive tasks from task_rx until it closes and drains, run
/// `work` on each, time the call, send the result. A work error rides inside
/// the result; the worker moves on to the next task. Stops early only when
/// the result channel has no receiver left, so results are never sent into a
/// void.
fn worker_loop<T, P, W>(
    id: usize,
    task_rx: Receiver<T>,
    result_tx: Sender<TaskResult<T, P>>,
    work: Arc<W>,
) where
    W: Fn(&T) -> anyhow::Result<P>,
{
    debug!("worker {}: started", id);
    let mut processed = 0_usize;
    while let Ok(task) = task_rx.recv() {
        debug!("worker {}: processing task {}", id, processed + 1);
        let started = Instant::now();
        let outcome = work(&task);
        let elapsed = started.elapsed();
        let result = TaskResult {
            task,
            outcome,
            elapsed,
        };
        if result_tx.send(result).is_err() {
            break;
        }
        processed += 1;
    }
    debug!("worker {}: done, {} tasks processed", id, processed);
    drop(result_tx);
}

/// Spawn `num_workers` workers competing on `task_rx`. Each holds the shared
/// work function behind an Arc and its own result sender clone. Caller must
/// hand its remaining result sender to the coordinator (or drop it) so the
/// channel closes once every worker exits.
pub fn spawn_workers<T, P, W>(
    task_rx: Receiver<T>,
    result_tx: &Sender<TaskResult<T, P>>,
    work: Arc<W>,
    num_workers: usize,
) -> Vec<JoinHandle<()>>
where
    T: Send + 'static,
    P: Send + 'static,
    W: Fn(&T) -> anyhow::Result<P> + Send + Sync + 'static,
{
    (0..num_workers)
        .map(|id| {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let work = Arc::clone(&work);
            thread::spawn(move || worker_loop(id, task_rx, result_tx, work))
        })
        .collect()
}
