use std::io;
use thiserror::Error;

/// Failures surfaced by the terminal session while greeting.
///
/// Every variant keeps the underlying I/O error as its source. Errors raised
/// after the session has started are reported only after the session has
/// been ended.
#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("Failed to start terminal session: {0}")]
    SessionStart(#[source] io::Error),

    #[error("Failed to write to terminal session: {0}")]
    Write(#[source] io::Error),

    #[error("Failed to refresh terminal display: {0}")]
    Refresh(#[source] io::Error),

    #[error("Failed to read key press: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to end terminal session: {0}")]
    SessionEnd(#[source] io::Error),
}
