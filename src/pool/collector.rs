//! Result collection: drains the result channel into an arrival-ordered Vec
//! and hands it back through the join handle.

use crossbeam_channel::Receiver;
use log::debug;
use std::thread::{self, JoinHandle};

use crate::TaskResult;

/// Spawn the collector thread: receive results until the channel closes, keep
/// them in arrival order, and return the full Vec. Joining the handle is the
/// completion signal; it consumes the handle, so delivery happens exactly
/// once, and it cannot return before the coordinator closes the channel.
/// `on_result` runs on the collector thread for each arrival; keep it fast or
/// forward to a channel.
pub fn spawn_collector_thread<T, P, F>(
    result_rx: Receiver<TaskResult<T, P>>,
    mut on_result: Option<F>,
) -> JoinHandle<Vec<TaskResult<T, P>>>
where
    T: Send + 'static,
    P: Send + 'static,
    F: FnMut(&TaskResult<T, P>) + Send + 'static,
{
    thread::spawn(move || {
        let mut results = Vec::new();
        while let Ok(result) = result_rx.recv() {
            if let Some(f) = on_result.as_mut() {
                f(&result);
            }
            results.push(result);
        }
        debug!(
            "collector: channel closed, total {} results",
            results.len()
        );
        results
    })
}
