//! Application configuration constants.
//! Tuning in one place.

// ---- Channels ----

/// Pool channel tuning.
pub struct ChannelDefaults;

impl ChannelDefaults {
    /// Capacity used when opts don't say otherwise. 0 keeps the handoff at a
    /// rendezvous: a send completes only when the matching receive runs,
    /// which is the backpressure the pool wants.
    pub const CAPACITY: usize = 0;
}

// ---- Demo workload ----

/// Bounds for the CLI demo workload.
pub struct DemoLimits;

impl DemoLimits {
    /// Longest delay a task spec may ask for (ms). Keeps a typo like an
    /// extra zero from turning the demo into a minutes-long hang.
    pub const MAX_DELAY_MS: u64 = 60_000;
}
