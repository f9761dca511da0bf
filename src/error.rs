//! Crate-level error type.

use crate::hardware::CollectError;
use std::io;
use thiserror::Error;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Hardware collection failed before the UI started.
    #[error("failed to collect hardware info: {0}")]
    Collect(#[from] CollectError),

    /// The terminal could not be put into UI mode.
    #[error("failed to initialize screen: {0}")]
    Screen(#[source] io::Error),

    /// Installing the termination signal handler failed.
    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// Talking to the terminal failed after it entered UI mode.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),

    /// The log file could not be opened or the subscriber installed.
    #[error("failed to set up logging: {0}")]
    Log(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
