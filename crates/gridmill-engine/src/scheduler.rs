//! The [`TickScheduler`] driving per-location tick calls.

use crossbeam_channel::Receiver;
use indexmap::IndexMap;

use gridmill_core::{BlockPos, KindId, TickId};
use gridmill_dispatch::HandlerRegistry;

use crate::command::{CommandSender, InteractionCommand};
use crate::config::SchedulerConfig;
use crate::metrics::TickMetrics;

/// What one [`run_tick`](TickScheduler::run_tick) call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was just executed.
    pub tick: TickId,
    /// Commands drained and applied this tick.
    pub commands_applied: u64,
    /// Commands drained and rejected this tick.
    pub commands_rejected: u64,
    /// Per-location tick calls issued this tick.
    pub locations_ticked: u64,
}

/// Drives registered handlers once per tick for every active location.
///
/// The scheduler owns the active-location map: positions become active
/// through `Place` commands and inactive through `Remove` commands,
/// both drained at the start of each tick. Active locations are ticked
/// in placement order (`IndexMap`), which keeps runs deterministic for
/// a given command sequence.
///
/// The scheduler is single-threaded by design — it lives on the tick
/// thread, and all cross-thread traffic goes through the bounded
/// command channel. Handler panics are not caught; see
/// [`LocationHandler`](gridmill_dispatch::LocationHandler).
pub struct TickScheduler<C> {
    handlers: HandlerRegistry<C>,
    active: IndexMap<BlockPos, KindId>,
    commands: Receiver<InteractionCommand>,
    current_tick: TickId,
    metrics: TickMetrics,
}

impl<C> TickScheduler<C> {
    /// Create a scheduler over `handlers`, returning the paired
    /// [`CommandSender`] for the interaction path.
    pub fn new(handlers: HandlerRegistry<C>, config: &SchedulerConfig) -> (Self, CommandSender) {
        let (tx, rx) = crossbeam_channel::bounded(config.command_capacity);
        let scheduler = Self {
            handlers,
            active: IndexMap::new(),
            commands: rx,
            current_tick: TickId(0),
            metrics: TickMetrics::default(),
        };
        (scheduler, CommandSender::new(tx))
    }

    /// Run one tick: drain pending commands, then tick every active
    /// location in placement order.
    pub fn run_tick(&mut self, ctx: &mut C) -> TickReport {
        let (applied, rejected) = self.drain_commands(ctx);

        self.current_tick = TickId(self.current_tick.0 + 1);

        let mut ticked = 0u64;
        for (&pos, &kind) in &self.active {
            // Registration is append-only, so the handler that admitted
            // this placement is still present.
            if let Some(handler) = self.handlers.handler(kind) {
                handler.tick(ctx, pos, self.current_tick);
                ticked += 1;
            }
        }

        self.metrics.ticks_run += 1;
        self.metrics.locations_ticked += ticked;

        TickReport {
            tick: self.current_tick,
            commands_applied: applied,
            commands_rejected: rejected,
            locations_ticked: ticked,
        }
    }

    /// Drain all pending interaction commands.
    ///
    /// Returns `(applied, rejected)` counts for this drain.
    fn drain_commands(&mut self, ctx: &mut C) -> (u64, u64) {
        let mut applied = 0u64;
        let mut rejected = 0u64;

        while let Ok(command) = self.commands.try_recv() {
            match command {
                InteractionCommand::Place { pos, kind } => {
                    if self.active.contains_key(&pos) {
                        self.metrics.occupied_rejections += 1;
                        rejected += 1;
                    } else if let Some(handler) = self.handlers.handler(kind) {
                        handler.on_place(ctx, pos);
                        self.active.insert(pos, kind);
                        self.metrics.commands_applied += 1;
                        applied += 1;
                    } else {
                        self.metrics.unknown_kind_rejections += 1;
                        rejected += 1;
                    }
                }
                InteractionCommand::Remove { pos } => match self.active.get(&pos).copied() {
                    Some(kind) => {
                        let allowed = self
                            .handlers
                            .handler(kind)
                            .map_or(true, |h| h.on_remove(ctx, pos));
                        if allowed {
                            // shift_remove preserves placement order for
                            // the remaining locations.
                            self.active.shift_remove(&pos);
                            self.metrics.commands_applied += 1;
                            applied += 1;
                        } else {
                            self.metrics.vetoed_removals += 1;
                            rejected += 1;
                        }
                    }
                    None => {
                        self.metrics.vacant_rejections += 1;
                        rejected += 1;
                    }
                },
            }
        }

        (applied, rejected)
    }

    /// The most recently executed tick.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Whether a location is currently active at `pos`.
    pub fn is_active(&self, pos: BlockPos) -> bool {
        self.active.contains_key(&pos)
    }

    /// Number of active locations.
    pub fn active_locations(&self) -> usize {
        self.active.len()
    }

    /// Cumulative metrics since construction.
    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }
}
