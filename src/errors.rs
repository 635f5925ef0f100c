//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the fatal errors
//! that can end a run, offering more context than generic I/O or `anyhow`
//! errors. Per-file and per-rename failures are not errors at this level:
//! they are recorded in the report and the run continues.

use std::path::Path;
use thiserror::Error;

/// A specialized `Result` type for `template-rebrand` library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the step they belong to.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Archive Errors ---
    /// The archive is missing, unreadable, or corrupt.
    #[error("Archive error for '{path}': {source}")]
    Archive {
        /// The archive that could not be read or written.
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    // --- Configuration Errors ---
    /// Invalid or missing input, rejected before any I/O.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Signal Handling ---
    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user")]
    Interrupted,
}

/// Validation errors raised while building a `JobConfig`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required input was not supplied or was blank.
    #[error("Missing required input: {0}")]
    MissingField(&'static str),
    /// An input was supplied but cannot be used.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        option: &'static str,
        reason: String,
    },
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::Archive` with path context.
pub fn archive_error_with_path<P: AsRef<Path>>(source: zip::result::ZipError, path: P) -> Error {
    Error::Archive {
        path: path.as_ref().display().to_string(),
        source,
    }
}
