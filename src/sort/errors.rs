//! Command error types for the visualizer engine
//!
//! This module defines [`CommandError`], which represents every way a user
//! command (generate, sort, reset) can be rejected. All rejections happen
//! synchronously at the command boundary, before any state mutation; none are
//! fatal and none propagate further than the status line.

use std::fmt;

/// Errors returned when a command is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The manual element list was empty after filtering non-numeric tokens.
    /// User-visible alert; no state change.
    InvalidInput { message: String },

    /// A command arrived while a run is active. Never queued.
    Busy { command: &'static str },

    /// Sort requested on a sequence too short to sort.
    PreconditionFailed { message: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            CommandError::Busy { command } => {
                write!(f, "Cannot {} while a sort is running", command)
            }
            CommandError::PreconditionFailed { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CommandError {}
