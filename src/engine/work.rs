//! Demo workload for the CLI: task specs parsed from the command line and a
//! simulated slow, failable work function. Stands in for any real operation
//! (an HTTP fetch, a conversion, a probe) the pool might run.

use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;

use crate::utils::config::DemoLimits;

/// One simulated task: a label, how long the work takes, and whether it is
/// scripted to fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSpec {
    pub label: String,
    pub delay_ms: u64,
    pub fail: bool,
}

impl TaskSpec {
    /// Parse `LABEL:DELAY_MS[:fail]`, e.g. `fetch-3:250` or `bad:10:fail`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let label = match parts.next() {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => return Err(anyhow::anyhow!("task spec '{}' has an empty label", s)),
        };
        let delay_ms = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("task spec '{}' is missing a delay", s))?
            .parse::<u64>()
            .with_context(|| format!("task spec '{}' has a non-numeric delay", s))?;
        if delay_ms > DemoLimits::MAX_DELAY_MS {
            return Err(anyhow::anyhow!(
                "task spec '{}' delay exceeds {} ms",
                s,
                DemoLimits::MAX_DELAY_MS
            ));
        }
        let fail = match parts.next() {
            None => false,
            Some("fail") => true,
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "task spec '{}' has unknown flag '{}' (expected 'fail')",
                    s,
                    other
                ));
            }
        };
        if parts.next().is_some() {
            return Err(anyhow::anyhow!("task spec '{}' has too many fields", s));
        }
        Ok(TaskSpec {
            label,
            delay_ms,
            fail,
        })
    }
}

/// Parse a list of specs, or fall back to the built-in set when empty.
pub fn parse_task_specs(specs: &[String]) -> Result<Vec<TaskSpec>> {
    if specs.is_empty() {
        return Ok(default_tasks());
    }
    specs.iter().map(|s| TaskSpec::parse(s)).collect()
}

/// Built-in workload used when no specs are given: mixed delays around a few
/// fast tasks, one scripted failure.
pub fn default_tasks() -> Vec<TaskSpec> {
    [
        ("alpha", 100, false),
        ("bravo", 200, false),
        ("charlie", 100, false),
        ("delta", 10, false),
        ("echo", 300, false),
        ("foxtrot", 10, true),
        ("golf", 100, false),
        ("hotel", 10, false),
    ]
    .into_iter()
    .map(|(label, delay_ms, fail)| TaskSpec {
        label: label.to_string(),
        delay_ms,
        fail,
    })
    .collect()
}

/// The simulated work function: sleep for the task's delay, then succeed or
/// fail as scripted. Safe to call from any number of workers at once.
pub fn simulate_work(task: &TaskSpec) -> Result<String> {
    thread::sleep(Duration::from_millis(task.delay_ms));
    if task.fail {
        return Err(anyhow::anyhow!("scripted failure for '{}'", task.label));
    }
    Ok(format!("finished after {} ms", task.delay_ms))
}
