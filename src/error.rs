//! Error types for the steam-monitor library.

use thiserror::Error;

/// Errors that can end a monitoring run early.
#[derive(Error, Debug)]
pub enum Error {
    /// The user interrupted the monitoring loop (Ctrl-C).
    #[error("monitoring interrupted")]
    Interrupted,

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The interrupt handler could not be installed.
    #[error("signal handler error: {0}")]
    Signal(String),
}

impl Error {
    /// Returns `true` if the run ended because the user asked it to.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// A specialized `Result` type for steam-monitor operations.
pub type Result<T> = std::result::Result<T, Error>;
