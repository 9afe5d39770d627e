//! Task source: feeds the caller's iterator into the task channel, one value
//! at a time, in iteration order.

use crossbeam_channel::Sender;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

/// Spawn the source thread: send every task from `tasks` on `task_tx`, then
/// drop the sender so workers see the channel close and exit. Returns the
/// count of tasks submitted. Producing a task never fails; failures belong to
/// the work function. When `cancel` is raised the feed stops early; tasks
/// already sent still run to completion.
pub fn spawn_source_thread<T, I>(
    task_tx: Sender<T>,
    tasks: I,
    cancel: Option<Arc<AtomicBool>>,
) -> JoinHandle<usize>
where
    T: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
{
    thread::spawn(move || {
        let mut count = 0_usize;
        for task in tasks {
            if let Some(flag) = &cancel
                && flag.load(Ordering::Relaxed)
            {
                debug!("source: cancel requested after {} tasks", count);
                break;
            }
            if task_tx.send(task).is_err() {
                break;
            }
            count += 1;
            debug!("source: submitted task {}", count);
        }
        debug!("source: done, {} tasks submitted", count);
        drop(task_tx);
        count
    })
}
