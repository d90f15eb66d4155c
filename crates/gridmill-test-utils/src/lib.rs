//! Test utilities and mock types for Gridmill development.
//!
//! Provides mock implementations of the core seams: a recording
//! [`ProgressSink`], an [`Operation`] with freely settable counters, and
//! a [`LocationHandler`] that counts its calls.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use gridmill_core::{BlockPos, Operation, TickId};
use gridmill_dispatch::LocationHandler;
use gridmill_registry::{IconUpdate, ProgressSink};

/// Mock [`ProgressSink`] recording every `set_icon` call.
///
/// Inspect results with [`calls`](MockProgressSink::calls) after
/// passing to code under test.
#[derive(Default)]
pub struct MockProgressSink {
    calls: Vec<(usize, IconUpdate)>,
}

impl MockProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(slot, icon)` pairs received so far, in call order.
    pub fn calls(&self) -> &[(usize, IconUpdate)] {
        &self.calls
    }
}

impl ProgressSink for MockProgressSink {
    fn set_icon(&mut self, slot: usize, icon: IconUpdate) {
        self.calls.push((slot, icon));
    }
}

/// Mock [`Operation`] with freely settable counters.
///
/// Unlike `TimedOperation`, the remaining count can be set to any value
/// — including one above the total, for testing `start` validation.
pub struct FixedOperation {
    total: u32,
    remaining: AtomicU32,
}

impl FixedOperation {
    /// Create an operation reporting the given counters verbatim.
    pub fn new(remaining: u32, total: u32) -> Self {
        Self {
            total,
            remaining: AtomicU32::new(remaining),
        }
    }

    /// Overwrite the remaining-ticks count.
    pub fn set_remaining(&self, remaining: u32) {
        self.remaining.store(remaining, Ordering::Release);
    }
}

impl Operation for FixedOperation {
    fn remaining_ticks(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    fn total_ticks(&self) -> u32 {
        self.total
    }
}

/// Mock [`LocationHandler`] counting place, remove, and tick calls.
///
/// Uses atomic counters so a shared reference satisfies the handler
/// trait's `Send + Sync` bound. Set `veto_removal` to exercise the
/// remove-veto path.
pub struct CountingHandler {
    places: AtomicUsize,
    removes: AtomicUsize,
    ticks: AtomicUsize,
    veto_removal: bool,
}

impl CountingHandler {
    pub fn new() -> Self {
        Self {
            places: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
            ticks: AtomicUsize::new(0),
            veto_removal: false,
        }
    }

    /// A handler that refuses every removal.
    pub fn vetoing() -> Self {
        Self {
            veto_removal: true,
            ..Self::new()
        }
    }

    pub fn places(&self) -> usize {
        self.places.load(Ordering::Relaxed)
    }

    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::Relaxed)
    }

    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LocationHandler<C> for CountingHandler {
    fn on_place(&self, _ctx: &mut C, _pos: BlockPos) {
        self.places.fetch_add(1, Ordering::Relaxed);
    }

    fn on_remove(&self, _ctx: &mut C, _pos: BlockPos) -> bool {
        self.removes.fetch_add(1, Ordering::Relaxed);
        !self.veto_removal
    }

    fn tick(&self, _ctx: &mut C, _pos: BlockPos, _tick: TickId) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }
}
