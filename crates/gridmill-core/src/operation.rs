//! The [`Operation`] capability trait and the stock [`TimedOperation`].

use std::sync::atomic::{AtomicU32, Ordering};

/// A stateful, multi-tick task tracked against one location.
///
/// The registry treats operations as opaque capabilities: it reads the
/// two counters and never mutates them. Advancement is the owning
/// logic's job — typically one decrement per simulation tick, followed
/// by an `end` call on the registry once the operation reports
/// [`is_finished`](Operation::is_finished).
///
/// Implementations must uphold `remaining_ticks() <= total_ticks()`;
/// the registry validates this on `start` and rejects violations.
pub trait Operation: Send + Sync {
    /// Ticks left until this operation completes.
    fn remaining_ticks(&self) -> u32;

    /// Total ticks this operation takes from start to finish.
    fn total_ticks(&self) -> u32;

    /// Whether the operation has run to completion.
    fn is_finished(&self) -> bool {
        self.remaining_ticks() == 0
    }
}

/// The stock [`Operation`]: a fixed total with an atomically decremented
/// remaining counter.
///
/// The remaining count is atomic so the owner can advance a shared
/// `Arc<TimedOperation>` while the registry hands out read handles to
/// the tick path concurrently. Both [`tick`](TimedOperation::tick) and
/// [`add_progress`](TimedOperation::add_progress) saturate at zero.
#[derive(Debug)]
pub struct TimedOperation {
    total: u32,
    remaining: AtomicU32,
}

impl TimedOperation {
    /// Create an operation that takes `total_ticks` ticks to complete.
    pub fn new(total_ticks: u32) -> Self {
        Self {
            total: total_ticks,
            remaining: AtomicU32::new(total_ticks),
        }
    }

    /// Advance by one tick.
    ///
    /// No effect once the remaining count has reached zero.
    pub fn tick(&self) {
        self.add_progress(1);
    }

    /// Advance by `ticks` ticks, saturating at completion.
    pub fn add_progress(&self, ticks: u32) {
        // fetch_update rather than fetch_sub: a plain subtraction could
        // wrap below zero when racing near completion.
        let _ = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |r| {
                Some(r.saturating_sub(ticks))
            });
    }
}

impl Operation for TimedOperation {
    fn remaining_ticks(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    fn total_ticks(&self) -> u32 {
        self.total
    }
}
