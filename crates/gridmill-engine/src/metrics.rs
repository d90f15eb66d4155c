//! Cumulative scheduler metrics.

/// Counters accumulated across a scheduler's lifetime.
///
/// Populated by [`run_tick`](crate::scheduler::TickScheduler::run_tick);
/// consumers (telemetry, diagnostics) read them from the scheduler
/// between ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Number of completed `run_tick` calls.
    pub ticks_run: u64,
    /// Total per-location tick calls issued.
    pub locations_ticked: u64,
    /// Commands applied successfully.
    pub commands_applied: u64,
    /// `Place` commands rejected because no handler serves the kind.
    pub unknown_kind_rejections: u64,
    /// `Place` commands rejected because the position was already active.
    pub occupied_rejections: u64,
    /// `Remove` commands rejected because the position was not active.
    pub vacant_rejections: u64,
    /// `Remove` commands refused by the location's handler.
    pub vetoed_removals: u64,
}
