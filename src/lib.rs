/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the application.
pub mod constants;

/// HTTP fetching of archives and text resources.
pub mod fetcher;

/// Zip archive extraction.
pub mod archive;

/// Denylist pruning of the extracted skeleton.
pub mod prune;

/// docker-compose.yml generation.
pub mod compose;

/// Composer dependency updater invocation.
pub mod updater;

/// The skeleton generation pipeline.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;
