//! Default values for repo-bridge configuration.
//!
//! Shared by the CLI flag definitions and the library so that both agree on
//! the organization, host and scratch-directory naming.

/// Organization used when neither `--org` nor `REPO_BRIDGE_ORG` is given.
pub const DEFAULT_ORG: &str = "Blue-Kelpie";

/// Git host used to build SSH clone URLs.
///
/// Overridden by the `--host` CLI flag or the `REPO_BRIDGE_HOST` environment
/// variable.
pub const DEFAULT_HOST: &str = "github.com";

/// Prefix of the scratch directory a repository is cloned into before its
/// contents are moved into the working directory. A random suffix is always
/// appended.
pub const TEMP_DIR_PREFIX: &str = ".repo-bridge-";
