//! Scheduler configuration.

/// Configuration for a [`TickScheduler`](crate::scheduler::TickScheduler).
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Capacity of the bounded interaction command channel.
    ///
    /// Commands beyond this limit are rejected with `QueueFull` until
    /// the next tick drains the queue. Default: 64.
    pub command_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            command_capacity: 64,
        }
    }
}
