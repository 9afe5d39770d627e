//! Shutdown coordinator: closes the result channel at the one correct moment,
//! after the last worker exits and never before.

use crossbeam_channel::Sender;
use log::debug;
use std::thread::{self, JoinHandle};

use crate::TaskResult;

/// Spawn the coordinator thread: join all worker handles, then drop the
/// retained result sender. Each worker drops its own sender clone on exit, so
/// this drop is the last one and the collector sees the channel close only
/// once every worker is done. Joining counts down over exactly N handles, one
/// per worker, in any order; dropping the sender earlier would cut results
/// off, never dropping it would leave the collector waiting forever. Returns
/// the count of workers that panicked instead of exiting cleanly.
pub fn spawn_coordinator_thread<T, P>(
    worker_handles: Vec<JoinHandle<()>>,
    result_tx: Sender<TaskResult<T, P>>,
) -> JoinHandle<usize>
where
    T: Send + 'static,
    P: Send + 'static,
{
    thread::spawn(move || {
        let num_workers = worker_handles.len();
        let mut panicked = 0_usize;
        for handle in worker_handles {
            if handle.join().is_err() {
                panicked += 1;
            }
        }
        debug!("coordinator: all {} workers joined", num_workers);
        drop(result_tx);
        panicked
    })
}
