//! The [`HandlerRegistry`] dispatch table.

use indexmap::IndexMap;

use gridmill_core::KindId;

use crate::error::DispatchError;
use crate::handler::LocationHandler;

/// Dispatch table mapping a location kind to its registered handler.
///
/// Registration happens once at startup, before ticking begins; lookup
/// is read-only afterwards, so no internal locking is needed. Iteration
/// order is registration order (`IndexMap`), which keeps any diagnostic
/// listing deterministic.
pub struct HandlerRegistry<C> {
    handlers: IndexMap<KindId, Box<dyn LocationHandler<C>>>,
}

impl<C> HandlerRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Register `handler` for `kind`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::DuplicateKind`] if a handler is already
    /// registered for `kind`; the existing handler stays in place.
    pub fn register(
        &mut self,
        kind: KindId,
        handler: Box<dyn LocationHandler<C>>,
    ) -> Result<(), DispatchError> {
        match self.handlers.entry(kind) {
            indexmap::map::Entry::Occupied(_) => Err(DispatchError::DuplicateKind(kind)),
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    /// The handler registered for `kind`, if any.
    pub fn handler(&self, kind: KindId) -> Option<&dyn LocationHandler<C>> {
        self.handlers.get(&kind).map(Box::as_ref)
    }

    /// Whether a handler is registered for `kind`.
    pub fn contains(&self, kind: KindId) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = KindId> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<C> Default for HandlerRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
