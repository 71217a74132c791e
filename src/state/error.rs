//! State management-specific error types.

use super::controls::Control;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Start requested with no time on the clock
    #[error("Nothing to count down: add time before starting")]
    NothingToCount,

    /// Control is not currently on screen
    #[error("Control not available: {0:?}")]
    ControlUnavailable(Control),
}
