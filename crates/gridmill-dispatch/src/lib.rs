//! Location-kind handler dispatch for Gridmill.
//!
//! Instead of per-location subclassing, every kind of location (machine
//! type) registers one [`LocationHandler`] strategy in a
//! [`HandlerRegistry`]. The registry is behavior-agnostic: it maps a
//! [`KindId`](gridmill_core::KindId) to its handler and nothing more,
//! keeping machine business rules out of the core.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handler;
pub mod registry;

pub use error::DispatchError;
pub use handler::LocationHandler;
pub use registry::HandlerRegistry;
