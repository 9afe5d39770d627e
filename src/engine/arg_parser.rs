use clap::Parser;

use crate::utils::config::ChannelDefaults;

/// Bounded worker pool demo: run slow, failable tasks on N threads.
#[derive(Clone, Parser)]
#[command(name = "taskmill")]
#[command(about = "Run tasks on a bounded worker pool; use --json for a machine-readable report.")]
pub struct Cli {
    /// Tasks as LABEL:DELAY_MS[:fail], e.g. `fetch-3:250` or `bad:10:fail`.
    /// Default: a built-in demo set.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Worker thread count. Default: the machine's logical CPU count.
    #[arg(long, short)]
    pub workers: Option<usize>,

    /// Capacity of the task and result channels. 0 means rendezvous handoff.
    #[arg(long, default_value_t = ChannelDefaults::CAPACITY)]
    pub capacity: usize,

    /// Show a progress bar instead of per-result lines.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,

    /// Print the report as JSON (suppresses per-result lines).
    #[arg(long, short = 'j', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub json: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn json(&self) -> bool {
        self.json.unwrap_or(false)
    }

    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(false)
    }
}
