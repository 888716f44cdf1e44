use std::path::PathBuf;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Raised while listing directories, including a missing root.
    #[error("Failed to walk directory tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to compile import pattern. Original error: {0}")]
    PatternError(#[from] regex::Error),

    /// Also covers files that are not valid UTF-8.
    #[error("Cannot read '{}'. Original error: {source}", path.display())]
    ReadError { path: PathBuf, source: std::io::Error },

    #[error("Cannot write '{}'. Original error: {source}", path.display())]
    WriteError { path: PathBuf, source: std::io::Error },

    #[error("Invalid extension '{0}': expected a non-empty name without '/', quotes or whitespace.")]
    InvalidExtensionError(String),

    /// The root directory is missing or cannot be inspected.
    #[error("Cannot proceed: root '{}' is not accessible. Original error: {source}", root.display())]
    RootAccessError { root: PathBuf, source: std::io::Error },

    #[error("Cannot proceed: root '{root}' is not a directory.")]
    RootNotADirectoryError { root: String },
}

/// Convenience type alias for Results with esmfix's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
