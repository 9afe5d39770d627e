//! Pool components: channels, source, workers, collector, shutdown
//! coordination. The only shared state between threads is the two channels
//! and the coordinator's join over the worker handles; there is no lock in
//! the pipeline.

pub mod collector;
pub mod context;
pub mod coordinator;
pub mod orchestrator;
pub mod source;
pub mod worker;

pub use collector::spawn_collector_thread;
pub use context::{PoolChannels, PoolRunResult, create_pool_channels, resolve_num_workers};
pub use coordinator::spawn_coordinator_thread;
pub use orchestrator::{PoolHandles, collect_results, run_pool};
pub use source::spawn_source_thread;
pub use worker::spawn_workers;
