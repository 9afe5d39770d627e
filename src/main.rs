//! Taskmill CLI: run a demo workload on a bounded worker pool.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use taskmill::engine::arg_parser::Cli;
use taskmill::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
