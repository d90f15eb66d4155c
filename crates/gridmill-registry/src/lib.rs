//! Concurrent per-location operation registry for Gridmill.
//!
//! [`OperationProcessor`] is the exclusive-ownership store mapping a
//! [`BlockPos`](gridmill_core::BlockPos) to at most one in-progress
//! operation. The tick path reads it once per active location per tick;
//! the interaction path occasionally starts and ends operations. A
//! reader/writer lock lets the reads proceed in parallel.
//!
//! The [`progress`] module renders an operation's completion ratio into
//! an external UI slot through the [`ProgressSink`] seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod processor;
pub mod progress;

pub use processor::OperationProcessor;
pub use progress::{completion_ratio, render, IconTemplate, IconUpdate, ProgressSink};
