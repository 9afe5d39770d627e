//! Run report: per-result lines as results arrive plus the end-of-run
//! summary, as text or JSON.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::engine::work::TaskSpec;
use crate::summary::RunSummary;
use crate::{RunOutcome, TaskResult};

/// One row of the report: what the task was and how it went.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskReport {
    pub label: String,
    pub ok: bool,
    /// Work output when ok, error string when not.
    pub detail: String,
    pub elapsed_ms: u64,
}

impl TaskReport {
    pub fn from_result(result: &TaskResult<TaskSpec, String>) -> Self {
        let (ok, detail) = match &result.outcome {
            Ok(payload) => (true, payload.clone()),
            Err(err) => (false, err.to_string()),
        };
        Self {
            label: result.task.label.clone(),
            ok,
            detail,
            elapsed_ms: result.elapsed.as_millis() as u64,
        }
    }
}

/// Full run report: every task row in arrival order plus run-level numbers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub tasks: Vec<TaskReport>,
    pub workers: usize,
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub wall_ms: u64,
    pub busy_ms: u64,
    pub speedup: f64,
    pub utilization: f64,
}

impl RunReport {
    pub fn build(outcome: &RunOutcome<TaskSpec, String>) -> Self {
        let summary =
            RunSummary::from_results(&outcome.results, outcome.wall_time, outcome.num_workers);
        Self {
            tasks: outcome
                .results
                .iter()
                .map(TaskReport::from_result)
                .collect(),
            workers: outcome.num_workers,
            submitted: outcome.submitted,
            succeeded: summary.succeeded,
            failed: summary.failed,
            wall_ms: summary.wall.as_millis() as u64,
            busy_ms: summary.busy.as_millis() as u64,
            speedup: summary.speedup(),
            utilization: summary.utilization(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One line per arriving result, with a running arrival counter.
pub fn print_result_line(n: usize, result: &TaskResult<TaskSpec, String>) {
    match &result.outcome {
        Ok(payload) => println!(
            "[{}] {} {} ({:.1?}): {}",
            n,
            "SUCCESS".green(),
            result.task.label.bold(),
            result.elapsed,
            payload
        ),
        Err(err) => println!(
            "[{}] {}   {} ({:.1?}): {}",
            n,
            "ERROR".red(),
            result.task.label.bold(),
            result.elapsed,
            err
        ),
    }
}

/// Print the end-of-run summary block.
pub fn print_report(report: &RunReport) {
    let failed = if report.failed > 0 {
        report.failed.to_string().red().to_string()
    } else {
        report.failed.to_string()
    };
    println!();
    println!("{}", "=== Run summary ===".bold());
    println!("Workers:      {}", report.workers);
    println!(
        "Tasks:        {} submitted, {} ok, {} failed",
        report.submitted, report.succeeded, failed
    );
    println!("Wall time:    {} ms", report.wall_ms);
    println!("Busy time:    {} ms across all workers", report.busy_ms);
    println!("Speedup:      {:.2}x vs a single worker", report.speedup);
    println!(
        "Utilization:  {:.1}% of {} workers (diagnostic)",
        report.utilization * 100.0,
        report.workers
    );
}
