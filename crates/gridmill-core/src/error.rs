//! Error types for the Gridmill core.
//!
//! Expected contention — starting on an occupied slot, ending a vacant
//! one — is communicated through boolean and `Option` results, never
//! through these errors. Errors are reserved for invalid inputs.

use std::error::Error;
use std::fmt;

/// Errors from registering an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationError {
    /// The operation's counters violate `remaining <= total`.
    ///
    /// Rejected before any registry mutation takes place.
    InvalidOperation {
        /// The offending remaining-ticks count.
        remaining: u32,
        /// The operation's total-ticks count.
        total: u32,
    },
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation { remaining, total } => {
                write!(
                    f,
                    "operation has {remaining} remaining ticks but only {total} total"
                )
            }
        }
    }
}

impl Error for OperationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_counters() {
        let err = OperationError::InvalidOperation {
            remaining: 12,
            total: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("10"));
    }
}
