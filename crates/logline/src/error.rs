//! Error handling for the logline binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for logline operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running logline.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Configuration or subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] logging::Error),
    /// The elapsed value was negative or not finite.
    #[error("Invalid elapsed seconds: {0}")]
    InvalidElapsed(f64),
}
