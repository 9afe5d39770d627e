//! Engine module for the CLI demo: argument parsing, run handling, display.

pub mod arg_parser;
pub mod handlers;
pub mod progress;
pub mod report;
pub mod work;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use report::{RunReport, TaskReport};
pub use work::{TaskSpec, default_tasks, parse_task_specs, simulate_work};
