//! Error types for handler dispatch.

use std::error::Error;
use std::fmt;

use gridmill_core::KindId;

/// Errors from handler registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// A handler is already registered for this kind.
    ///
    /// The first registration stays in place; the duplicate is dropped.
    DuplicateKind(KindId),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKind(kind) => {
                write!(f, "a handler is already registered for kind {kind}")
            }
        }
    }
}

impl Error for DispatchError {}
