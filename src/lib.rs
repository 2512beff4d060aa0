//! # repo-bridge Library
//!
//! Connects a local working directory to an organization's repositories on
//! the hosting platform. A run either creates a new repository (blank or from
//! a template) or picks an existing one, then clones it and merges its
//! top-level contents into the working directory.
//!
//! ## Quick Example
//!
//! ```
//! use repo_bridge::repository::{parse_listing, RepositoryId};
//!
//! let listing = r#"{"name":"wp-starter","description":"Starter theme"}
//! {"name":"wp-blank","description":null}"#;
//! let repos = parse_listing(listing).unwrap();
//! assert_eq!(repos[0].label(), "wp-starter — Starter theme");
//!
//! let id = RepositoryId::new("Blue-Kelpie", &repos[1].name);
//! assert_eq!(id.ssh_url("github.com"), "git@github.com:Blue-Kelpie/wp-blank.git");
//! ```
//!
//! ## Core Concepts
//!
//! - **Repositories (`repository`)**: descriptors, identifiers, and the
//!   `HostingPlatform` / `SourceControl` traits the rest of the crate talks
//!   through. `github` and `git` hold the `gh` and `git` command wrappers
//!   behind the default implementations.
//! - **Prompting (`prompt`)**: the `Prompter` trait and its dialoguer-backed
//!   implementation.
//! - **Merge-clone (`merge`)**: clone into a scratch directory, move the
//!   top-level entries into place with overwrite, and always clean up.
//! - **Provisioning (`provision`)**: the interactive decision sequence that
//!   ties everything together.

pub mod defaults;
pub mod error;
pub mod git;
pub mod github;
pub mod merge;
pub mod output;
pub mod prompt;
pub mod provision;
pub mod repository;

#[cfg(test)]
mod listing_proptest;
