//! Command handler for the demo run.

use anyhow::{Context, Result};
use kdam::Animation;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::arg_parser::Cli;
use crate::engine::progress::{
    ProgressBarConfig, create_progress_bar, progress_callback, refresh_bar,
};
use crate::engine::report::{RunReport, print_report, print_result_line};
use crate::engine::work::{TaskSpec, parse_task_specs, simulate_work};
use crate::utils::setup_logging;
use crate::{PoolOpts, TaskResult, run_tasks};

type OnResult = Box<dyn FnMut(&TaskResult<TaskSpec, String>) + Send>;

/// Setup logging and build the workload and pool opts from the CLI.
fn setup_operation(cli: &Cli) -> Result<(Vec<TaskSpec>, PoolOpts)> {
    setup_logging(cli.verbose());
    let tasks = parse_task_specs(&cli.tasks)?;
    let opts = PoolOpts {
        num_workers: cli.workers,
        channel_capacity: cli.capacity,
        cancel: None,
    };
    Ok((tasks, opts))
}

/// Build the per-result callback for the chosen output mode: nothing in JSON
/// mode, a bar update in progress mode, otherwise a numbered line per result.
fn build_on_result(cli: &Cli, total: usize) -> Option<OnResult> {
    if cli.json() {
        return None;
    }
    if cli.progress() {
        let bar = create_progress_bar(ProgressBarConfig::new(
            total,
            "Processing",
            Animation::Classic,
        ));
        refresh_bar(&bar);
        let update = progress_callback(&Some(bar));
        return update
            .map(|f| Box::new(move |_r: &TaskResult<TaskSpec, String>| f(1)) as OnResult);
    }
    let mut n = 0_usize;
    Some(Box::new(move |r: &TaskResult<TaskSpec, String>| {
        n += 1;
        print_result_line(n, r);
    }))
}

/// Handle the demo run: wire Ctrl-C to the cancel flag, run the pool with the
/// chosen per-result callback, then print or serialize the report.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let (tasks, mut opts) = setup_operation(cli)?;

    let cancel_requested = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel_requested);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;
    opts.cancel = Some(Arc::clone(&cancel_requested));

    let on_result = build_on_result(cli, tasks.len());
    let outcome = run_tasks(tasks, simulate_work, &opts, on_result)?;

    let report = RunReport::build(&outcome);
    if cli.json() {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    if cancel_requested.load(Ordering::Relaxed) {
        return Err(anyhow::anyhow!(
            "Run cancelled by user; results above are partial"
        ));
    }
    Ok(())
}
