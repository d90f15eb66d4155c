//! The [`OperationProcessor`] registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use gridmill_core::{BlockPos, Operation, OperationError};

use crate::progress::{render, IconTemplate, ProgressSink};

/// Concurrent registry tracking at most one operation per position.
///
/// Parameterized over any [`Operation`] implementation rather than a
/// base class: the processor never touches an operation's counters, it
/// only enforces exclusive per-position ownership of the slot.
///
/// # Concurrency
///
/// A single `RwLock` guards the position map: arbitrarily many
/// [`get`](Self::get) calls proceed in parallel, while
/// [`start`](Self::start) and [`end`](Self::end) take the write lock.
/// Critical sections are limited to the map operation itself, so a
/// caller panic never leaves a partially-applied mutation visible.
/// Ordinary contention — starting on an occupied slot, ending a vacant
/// one — is reported through `Ok(false)` / `false`, never an error.
pub struct OperationProcessor<T: Operation> {
    machines: RwLock<HashMap<BlockPos, Arc<T>>>,
    progress_bar: RwLock<Option<IconTemplate>>,
}

impl<T: Operation> OperationProcessor<T> {
    /// Create an empty processor with no progress-bar template.
    pub fn new() -> Self {
        Self {
            machines: RwLock::new(HashMap::new()),
            progress_bar: RwLock::new(None),
        }
    }

    /// The configured progress-bar template, or `None` if rendering is
    /// disabled.
    pub fn progress_bar(&self) -> Option<IconTemplate> {
        self.progress_bar
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set or clear the progress-bar template.
    ///
    /// `None` disables all UI updates from
    /// [`update_progress`](Self::update_progress).
    pub fn set_progress_bar(&self, template: Option<IconTemplate>) {
        *self
            .progress_bar
            .write()
            .unwrap_or_else(PoisonError::into_inner) = template;
    }

    /// Start `operation` at `pos`.
    ///
    /// Returns `Ok(true)` if the slot was vacant and the operation is
    /// now registered, or `Ok(false)` if another operation already
    /// occupies the position — an expected outcome under contention,
    /// not a fault. Exactly one of any set of racing `start` calls for
    /// the same position succeeds.
    ///
    /// # Errors
    ///
    /// [`OperationError::InvalidOperation`] if the operation reports
    /// more remaining ticks than its total; the registry is left
    /// untouched.
    pub fn start(&self, pos: BlockPos, operation: Arc<T>) -> Result<bool, OperationError> {
        let remaining = operation.remaining_ticks();
        let total = operation.total_ticks();
        if remaining > total {
            return Err(OperationError::InvalidOperation { remaining, total });
        }

        let mut machines = self
            .machines
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(match machines.entry(pos) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(operation);
                true
            }
        })
    }

    /// The operation currently registered at `pos`, if any.
    ///
    /// Never mutates registry state. Safe to call far more frequently
    /// than writes; concurrent `get` calls do not block each other.
    pub fn get(&self, pos: BlockPos) -> Option<Arc<T>> {
        self.machines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&pos)
            .cloned()
    }

    /// End the operation at `pos`.
    ///
    /// Returns `true` if an operation was registered there and has now
    /// been removed, `false` if the slot was already vacant. Idempotent:
    /// repeated calls after the first return `false`. The position is
    /// immediately reusable for a fresh `start`.
    pub fn end(&self, pos: BlockPos) -> bool {
        self.machines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&pos)
            .is_some()
    }

    /// Render `operation`'s progress into `slot` of `sink`.
    ///
    /// No-op when no progress-bar template is configured. The
    /// operation need not be registered with this processor.
    pub fn update_progress(&self, sink: &mut dyn ProgressSink, slot: usize, operation: &T) {
        let template = self.progress_bar();
        render(template.as_ref(), sink, slot, operation);
    }

    /// Number of positions with an operation in progress.
    pub fn len(&self) -> usize {
        self.machines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no operation is in progress anywhere.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Operation> Default for OperationProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}
