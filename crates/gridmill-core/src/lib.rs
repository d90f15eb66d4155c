//! Core types and traits for the Gridmill machine framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Gridmill workspace:
//! type IDs, the spatial key, the operation capability trait, and error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod operation;
pub mod position;

pub use error::OperationError;
pub use id::{KindId, TickId, WorldId};
pub use operation::{Operation, TimedOperation};
pub use position::BlockPos;
