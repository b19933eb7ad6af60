/// Handles argument parsing and orchestration.
pub mod cli;

/// Loading of the setup configuration file.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Per-file substitution rules and the processor that applies them.
pub mod rewrite;

/// Import name and interpreter version checks.
pub mod validation;
