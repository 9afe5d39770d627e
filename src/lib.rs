//! Taskmill: bounded worker pool that runs slow, failable tasks on N threads
//! and funnels every result to a single collector.

pub mod engine;
pub mod pool;
pub mod summary;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::time::Instant;

/// Result alias used by public taskmill API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: run every task from `tasks` through `work` on a pool
/// of [`PoolOpts::num_workers`] threads and return the full result set once
/// the last one has arrived.
///
/// - **`on_result: None`** → plain path; results come back only in the final
///   [`RunOutcome`].
/// - **`on_result: Some(f)`** → streaming observation. `f` runs on the
///   collector thread for each result as it arrives, before the run
///   completes. Keep it fast or forward to a channel.
///
/// Per-task failures ride inside [`TaskResult::outcome`] and never abort the
/// run; the returned `Err` is reserved for construction (zero workers) and
/// thread panics.
pub fn run_tasks<T, P, I, W, F>(
    tasks: I,
    work: W,
    opts: &PoolOpts,
    on_result: Option<F>,
) -> Result<RunOutcome<T, P>>
where
    T: Send + 'static,
    P: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
    W: Fn(&T) -> Result<P> + Send + Sync + 'static,
    F: FnMut(&TaskResult<T, P>) + Send + 'static,
{
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    let started = Instant::now();
    let handles = pool::run_pool(tasks, work, opts, on_result)?;
    let num_workers = handles.num_workers;
    let (results, submitted) = pool::collect_results(handles)?;

    Ok(RunOutcome {
        results,
        submitted,
        num_workers,
        wall_time: started.elapsed(),
    })
}
