//! Gridmill: per-location machine operations for tick-driven simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gridmill sub-crates. For most users, adding `gridmill` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridmill::prelude::*;
//! use std::sync::Arc;
//!
//! // The registry tracks at most one operation per position.
//! let processor = OperationProcessor::new();
//! let pos = BlockPos::new(WorldId(0), 10, 64, -3);
//!
//! let op = Arc::new(TimedOperation::new(20));
//! assert!(processor.start(pos, op.clone()).unwrap());
//!
//! // A second start on the same position loses the slot.
//! assert!(!processor.start(pos, Arc::new(TimedOperation::new(5))).unwrap());
//!
//! // The owner advances the operation each tick, then ends it.
//! op.tick();
//! assert_eq!(processor.get(pos).unwrap().remaining_ticks(), 19);
//! assert!(processor.end(pos));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridmill-core` | IDs, positions, the operation trait, errors |
//! | [`registry`] | `gridmill-registry` | The operation registry and progress rendering |
//! | [`dispatch`] | `gridmill-dispatch` | Location-kind handler dispatch |
//! | [`engine`] | `gridmill-engine` | Tick scheduling and interaction ingress |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`gridmill-core`).
///
/// Contains [`types::BlockPos`], [`types::Operation`],
/// [`types::TimedOperation`], and the ID newtypes.
pub use gridmill_core as types;

/// The operation registry and progress rendering (`gridmill-registry`).
///
/// [`registry::OperationProcessor`] is the exclusive-ownership store;
/// [`registry::ProgressSink`] is the UI seam.
pub use gridmill_registry as registry;

/// Location-kind handler dispatch (`gridmill-dispatch`).
///
/// The [`dispatch::LocationHandler`] trait is the main extension point
/// for machine behavior.
pub use gridmill_dispatch as dispatch;

/// Tick scheduling and interaction ingress (`gridmill-engine`).
///
/// [`engine::TickScheduler`] drives per-location tick calls;
/// [`engine::CommandSender`] submits placements and removals from other
/// threads.
pub use gridmill_engine as engine;

/// Common imports for typical Gridmill usage.
///
/// ```rust
/// use gridmill::prelude::*;
/// ```
pub mod prelude {
    pub use gridmill_core::{
        BlockPos, KindId, Operation, OperationError, TickId, TimedOperation, WorldId,
    };
    pub use gridmill_dispatch::{HandlerRegistry, LocationHandler};
    pub use gridmill_engine::{
        CommandSender, InteractionCommand, SchedulerConfig, TickScheduler,
    };
    pub use gridmill_registry::{IconTemplate, OperationProcessor, ProgressSink};
}
