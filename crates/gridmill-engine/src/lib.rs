//! Tick scheduling and interaction ingress for Gridmill.
//!
//! [`TickScheduler`] drives the per-location tick calls: each
//! [`run_tick`](TickScheduler::run_tick) drains the interaction command
//! channel (placements and removals submitted from other threads via
//! [`CommandSender`]), then advances the tick counter and calls every
//! active location's handler in placement order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod metrics;
pub mod scheduler;

pub use command::{CommandSender, InteractionCommand, SubmitError};
pub use config::SchedulerConfig;
pub use metrics::TickMetrics;
pub use scheduler::{TickReport, TickScheduler};
