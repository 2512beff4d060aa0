//! # Error Handling
//!
//! Centralized error type for `repo-bridge`, built with `thiserror`.
//!
//! Every failure the tool can hit falls into one of a few buckets:
//!
//! - An organization listing came back empty.
//! - An external command (`gh` or `git`) could not be spawned or exited
//!   non-zero.
//! - The platform returned a listing line that is not valid JSON.
//! - A filesystem operation failed while merging a clone into the working
//!   directory.
//! - An interactive prompt could not be shown or was interrupted.
//!
//! None of these are retried. The binary turns any of them into a one-line
//! diagnostic and exit code 1.

use thiserror::Error;

use crate::repository::RepositoryKind;

/// Main error type for repo-bridge operations
#[derive(Error, Debug)]
pub enum Error {
    /// The organization has no repositories of the requested kind.
    #[error("No {kind} repositories found in organization {org}")]
    NoRepositories { kind: RepositoryKind, org: String },

    /// An external program could not be started at all (usually not installed).
    #[error("Failed to run `{program}`: {message}")]
    CommandSpawn { program: String, message: String },

    /// An external program ran but exited with a failure status.
    #[error("`{program} {args}` failed: {stderr}")]
    Command {
        program: String,
        args: String,
        stderr: String,
    },

    /// Cloning a repository failed.
    ///
    /// Carries an optional hint when the failure looks like a credentials problem.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        hint: Option<String>,
    },

    /// A line of repository listing output could not be parsed.
    #[error("Invalid repository listing line {line}: {message}")]
    Listing { line: usize, message: String },

    /// A filesystem step of the merge failed.
    #[error("Merge error: {operation} '{path}': {source}")]
    Merge {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive prompt failed (no terminal, interrupted input).
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
