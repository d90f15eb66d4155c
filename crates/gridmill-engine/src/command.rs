//! Interaction commands and the bounded submission channel.
//!
//! Placements and removals originate on interaction threads (player
//! input, scripting) and cross into the tick thread over a bounded
//! crossbeam channel. The scheduler drains the channel at the start of
//! each tick, so commands never interleave with per-location tick calls.

use std::error::Error;
use std::fmt;

use crossbeam_channel::{Sender, TrySendError};

use gridmill_core::{BlockPos, KindId};

/// A state change requested by the interaction path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionCommand {
    /// Activate a location of the given kind at `pos`.
    Place {
        /// Where the location is placed.
        pos: BlockPos,
        /// Which handler serves it.
        kind: KindId,
    },
    /// Deactivate the location at `pos`.
    Remove {
        /// The location being removed.
        pos: BlockPos,
    },
}

/// Errors from [`CommandSender::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The command channel is at capacity; retry after the next tick.
    QueueFull,
    /// The scheduler has been dropped; no further commands can apply.
    Disconnected,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "command queue full"),
            Self::Disconnected => write!(f, "scheduler has shut down"),
        }
    }
}

impl Error for SubmitError {}

/// Cloneable handle for submitting commands to a [`TickScheduler`].
///
/// [`TickScheduler`]: crate::scheduler::TickScheduler
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<InteractionCommand>,
}

impl CommandSender {
    pub(crate) fn new(tx: Sender<InteractionCommand>) -> Self {
        Self { tx }
    }

    /// Queue `command` for the next tick.
    ///
    /// Non-blocking: a full queue is reported as
    /// [`SubmitError::QueueFull`] rather than waited out, keeping the
    /// interaction path responsive.
    pub fn submit(&self, command: InteractionCommand) -> Result<(), SubmitError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::QueueFull,
            TrySendError::Disconnected(_) => SubmitError::Disconnected,
        })
    }
}
