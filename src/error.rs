//! Error handling for the lockstep library.
//!
//! This module provides centralized error handling for progress display and
//! simulation operations. All errors implement the standard Error trait.

use crate::task::TaskId;
use std::io;
use thiserror::Error;

/// Errors that can happen when using lockstep.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The progress bar template could not be parsed by indicatif.
    #[error("Invalid progress template")]
    Template {
        #[from]
        source: indicatif::style::TemplateError,
    },

    /// The task id was never registered with the display, or was removed.
    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors, typically raised while writing
    /// to the terminal.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a lockstep error.
pub type Result<T> = std::result::Result<T, Error>;
