//! The [`LocationHandler`] strategy trait.

use gridmill_core::{BlockPos, TickId};

/// Per-kind behavior for locations of one machine type.
///
/// One handler instance serves every location of its kind; per-location
/// state lives in the context `C` (and in the operation registry), not
/// in the handler. `C` is whatever world/inventory surface the host
/// application passes through the scheduler — this crate never inspects
/// it.
///
/// Handlers must not panic: the tick scheduler calls them with no
/// recovery path, and a panic in one handler aborts the whole tick.
pub trait LocationHandler<C>: Send + Sync {
    /// A location of this kind was placed at `pos`.
    ///
    /// Default: nothing to set up.
    fn on_place(&self, ctx: &mut C, pos: BlockPos) {
        let _ = (ctx, pos);
    }

    /// A location of this kind is being removed from `pos`.
    ///
    /// Return `false` to veto the removal (the location stays active).
    /// This is where handlers drop held inventory and call `end` on any
    /// in-progress operation so the registry slot does not leak.
    /// Default: allow the removal.
    fn on_remove(&self, ctx: &mut C, pos: BlockPos) -> bool {
        let _ = (ctx, pos);
        true
    }

    /// One simulation tick for the location at `pos`.
    ///
    /// Called once per tick for every active location of this kind.
    /// The usual shape: `get` the in-progress operation (or `start`
    /// one), advance it, refresh the progress bar, and `end` it once
    /// finished.
    fn tick(&self, ctx: &mut C, pos: BlockPos, tick: TickId);
}
