/// Handles argument parsing and run orchestration.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Import statement rewriting.
pub mod rewriter;

/// Recursive traversal of the output tree.
pub mod walker;
