//! End-to-end test: a machine handler drives an operation through the
//! registry across ticks, rendering progress and ending the operation
//! on completion and on removal.

use std::sync::Arc;

use gridmill_core::{BlockPos, KindId, Operation, TimedOperation, WorldId};
use gridmill_dispatch::{HandlerRegistry, LocationHandler};
use gridmill_engine::{CommandSender, InteractionCommand, SchedulerConfig, TickScheduler};
use gridmill_registry::{IconTemplate, OperationProcessor};
use gridmill_test_utils::{CountingHandler, MockProgressSink};

const PROGRESS_SLOT: usize = 22;
const SMELT_TICKS: u32 = 4;

/// A furnace-style machine: starts a timed operation on the first tick,
/// advances it each tick, renders progress, and ends it when done.
struct Smelter {
    processor: Arc<OperationProcessor<TimedOperation>>,
}

impl LocationHandler<MockProgressSink> for Smelter {
    fn on_remove(&self, _ctx: &mut MockProgressSink, pos: BlockPos) -> bool {
        // Cancel any in-progress work so the registry slot doesn't leak.
        self.processor.end(pos);
        true
    }

    fn tick(&self, ctx: &mut MockProgressSink, pos: BlockPos, _tick: gridmill_core::TickId) {
        match self.processor.get(pos) {
            Some(op) => {
                op.tick();
                self.processor.update_progress(ctx, PROGRESS_SLOT, &op);
                if op.is_finished() {
                    assert!(self.processor.end(pos));
                }
            }
            None => {
                let started = self
                    .processor
                    .start(pos, Arc::new(TimedOperation::new(SMELT_TICKS)))
                    .unwrap();
                assert!(started, "handler is the only writer for its position");
            }
        }
    }
}

fn pos(x: i32) -> BlockPos {
    BlockPos::new(WorldId(0), x, 64, 0)
}

fn smelter_world() -> (
    Arc<OperationProcessor<TimedOperation>>,
    TickScheduler<MockProgressSink>,
    CommandSender,
) {
    let processor = Arc::new(OperationProcessor::new());
    processor.set_progress_bar(Some(IconTemplate::new("Smelting", '\u{2692}')));

    let mut handlers = HandlerRegistry::new();
    handlers
        .register(
            KindId(1),
            Box::new(Smelter {
                processor: Arc::clone(&processor),
            }),
        )
        .unwrap();

    let (scheduler, sender) = TickScheduler::new(handlers, &SchedulerConfig::default());
    (processor, scheduler, sender)
}

#[test]
fn operation_runs_to_completion_and_frees_its_slot() {
    let (processor, mut scheduler, sender) = smelter_world();
    let mut ui = MockProgressSink::new();

    sender
        .submit(InteractionCommand::Place {
            pos: pos(0),
            kind: KindId(1),
        })
        .unwrap();

    // Tick 1 starts the operation.
    scheduler.run_tick(&mut ui);
    let op = processor.get(pos(0)).expect("operation started");
    assert_eq!(op.remaining_ticks(), SMELT_TICKS);

    // SMELT_TICKS more ticks advance it to completion and end it.
    for _ in 0..SMELT_TICKS {
        scheduler.run_tick(&mut ui);
    }
    assert!(op.is_finished());
    assert!(processor.get(pos(0)).is_none(), "slot freed on completion");

    // One progress render per advancing tick, ratios non-decreasing up
    // to fully complete.
    assert_eq!(ui.calls().len(), SMELT_TICKS as usize);
    let ratios: Vec<f64> = ui.calls().iter().map(|(_, icon)| icon.ratio).collect();
    assert!(ratios.windows(2).all(|w| w[0] <= w[1]));
    assert!((ratios.last().unwrap() - 1.0).abs() < f64::EPSILON);
    assert_eq!(ui.calls().last().unwrap().1.label, "100%");
    assert!(ui.calls().iter().all(|(slot, _)| *slot == PROGRESS_SLOT));
}

#[test]
fn slot_is_reused_for_the_next_batch() {
    let (processor, mut scheduler, sender) = smelter_world();
    let mut ui = MockProgressSink::new();

    sender
        .submit(InteractionCommand::Place {
            pos: pos(0),
            kind: KindId(1),
        })
        .unwrap();

    // First batch: start + run to completion. Next tick starts a fresh
    // operation in the same slot.
    for _ in 0..(1 + SMELT_TICKS) {
        scheduler.run_tick(&mut ui);
    }
    scheduler.run_tick(&mut ui);

    let second = processor.get(pos(0)).expect("second operation started");
    assert_eq!(second.remaining_ticks(), SMELT_TICKS);
}

#[test]
fn removal_cancels_the_in_progress_operation() {
    let (processor, mut scheduler, sender) = smelter_world();
    let mut ui = MockProgressSink::new();

    sender
        .submit(InteractionCommand::Place {
            pos: pos(0),
            kind: KindId(1),
        })
        .unwrap();
    scheduler.run_tick(&mut ui);
    assert!(processor.get(pos(0)).is_some());

    sender
        .submit(InteractionCommand::Remove { pos: pos(0) })
        .unwrap();
    scheduler.run_tick(&mut ui);

    assert!(!scheduler.is_active(pos(0)));
    assert!(
        processor.get(pos(0)).is_none(),
        "on_remove ended the operation"
    );
}

#[test]
fn vetoing_handler_keeps_its_location_active() {
    let mut handlers: HandlerRegistry<()> = HandlerRegistry::new();
    let handler = Arc::new(CountingHandler::vetoing());
    handlers
        .register(KindId(1), Box::new(SharedHandler(Arc::clone(&handler))))
        .unwrap();

    let (mut scheduler, sender) = TickScheduler::new(handlers, &SchedulerConfig::default());
    sender
        .submit(InteractionCommand::Place {
            pos: pos(2),
            kind: KindId(1),
        })
        .unwrap();
    scheduler.run_tick(&mut ());

    sender
        .submit(InteractionCommand::Remove { pos: pos(2) })
        .unwrap();
    scheduler.run_tick(&mut ());

    assert!(scheduler.is_active(pos(2)), "removal was vetoed");
    assert_eq!(handler.removes(), 1);
    assert_eq!(scheduler.metrics().vetoed_removals, 1);
    assert_eq!(handler.ticks(), 2, "ticked on both run_tick calls");
}

/// Adapter delegating to a shared [`CountingHandler`] so the test can
/// read its counters after handing ownership to the registry.
struct SharedHandler(Arc<CountingHandler>);

impl<C> LocationHandler<C> for SharedHandler {
    fn on_place(&self, ctx: &mut C, pos: BlockPos) {
        LocationHandler::<C>::on_place(&*self.0, ctx, pos);
    }

    fn on_remove(&self, ctx: &mut C, pos: BlockPos) -> bool {
        LocationHandler::<C>::on_remove(&*self.0, ctx, pos)
    }

    fn tick(&self, ctx: &mut C, pos: BlockPos, tick: gridmill_core::TickId) {
        LocationHandler::<C>::tick(&*self.0, ctx, pos, tick);
    }
}
