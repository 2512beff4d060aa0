//! # Repositories and the Tools That Manage Them
//!
//! This module holds the small data model the tool works with and the two
//! seams through which it talks to the outside world.
//!
//! ## Data
//!
//! - **`RepositoryDescriptor`**: a `name` plus an optional `description`, as
//!   returned by the organization listing.
//! - **`RepositoryKind`**: whether a listing asks for template repositories or
//!   ordinary project repositories.
//! - **`RepositoryId`**: an organization and a repository name, which together
//!   produce the `org/name` slug and the SSH clone URL.
//!
//! ## Seams
//!
//! - **`HostingPlatform`**: list the organization's repositories and create new
//!   ones. `GhPlatform` implements it on top of the `gh` CLI.
//! - **`SourceControl`**: clone a repository into a local directory.
//!   `GitSourceControl` implements it on top of the `git` CLI.
//!
//! Both traits exist so the provisioning flow and the merge step can be tested
//! with in-process fakes instead of network-backed tools.

use std::fmt;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One repository as reported by the organization listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositoryDescriptor {
    /// Label shown in selection prompts: `name — description`, or just the
    /// name when there is no description.
    pub fn label(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                format!("{} — {}", self.name, description)
            }
            _ => self.name.clone(),
        }
    }
}

/// Which side of the `is_template` flag a listing selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    Template,
    Project,
}

impl RepositoryKind {
    /// Value of the platform's `is_template` field for this kind.
    pub fn is_template(self) -> bool {
        matches!(self, RepositoryKind::Template)
    }

    /// Plural noun used in progress messages ("Fetching available templates").
    pub fn plural(self) -> &'static str {
        match self {
            RepositoryKind::Template => "templates",
            RepositoryKind::Project => "projects",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryKind::Template => f.write_str("template"),
            RepositoryKind::Project => f.write_str("project"),
        }
    }
}

/// A repository inside an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub org: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(org: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
        }
    }

    /// `org/name`, the form `gh` expects.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.org, self.name)
    }

    /// SSH clone URL on the given host, e.g. `git@github.com:org/name.git`.
    pub fn ssh_url(&self, host: &str) -> String {
        format!("git@{}:{}/{}.git", host, self.org, self.name)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// Parse line-delimited JSON listing output into descriptors.
///
/// Blank lines are skipped. Entries with an empty name are dropped with a
/// warning. Any other malformed line is an error naming its 1-based line
/// number.
pub fn parse_listing(output: &str) -> Result<Vec<RepositoryDescriptor>> {
    let mut repositories = Vec::new();

    for (index, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let descriptor: RepositoryDescriptor =
            serde_json::from_str(line).map_err(|e| Error::Listing {
                line: index + 1,
                message: e.to_string(),
            })?;

        if descriptor.name.trim().is_empty() {
            warn!("Skipping listing line {} with an empty name", index + 1);
            continue;
        }

        repositories.push(descriptor);
    }

    Ok(repositories)
}

/// Operations against the hosting platform - allows mocking in tests
pub trait HostingPlatform {
    /// Organization this platform handle operates on.
    fn org(&self) -> &str;

    /// Lists the organization's repositories of the given kind.
    ///
    /// An empty result is not an error at this level.
    fn list_repositories(&self, kind: RepositoryKind) -> Result<Vec<RepositoryDescriptor>>;

    /// Creates a public repository, optionally seeded from a template
    /// repository in the same organization.
    fn create_repository(&self, name: &str, template: Option<&str>) -> Result<()>;
}

/// Source-control client operations - allows mocking in tests
pub trait SourceControl {
    /// Clones the full repository at `url` into `target_dir`.
    ///
    /// `target_dir` may already exist as long as it is empty.
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// `HostingPlatform` backed by the `gh` CLI.
pub struct GhPlatform {
    org: String,
}

impl GhPlatform {
    pub fn new(org: impl Into<String>) -> Self {
        Self { org: org.into() }
    }
}

impl HostingPlatform for GhPlatform {
    fn org(&self) -> &str {
        &self.org
    }

    fn list_repositories(&self, kind: RepositoryKind) -> Result<Vec<RepositoryDescriptor>> {
        let output = crate::github::list_repositories(&self.org, kind.is_template())?;
        parse_listing(&output)
    }

    fn create_repository(&self, name: &str, template: Option<&str>) -> Result<()> {
        let repo = RepositoryId::new(self.org.clone(), name);
        let template = template.map(|t| RepositoryId::new(self.org.clone(), t));
        crate::github::create_repository(&repo, template.as_ref())
    }
}

/// `SourceControl` backed by the system `git` command.
pub struct GitSourceControl;

impl SourceControl for GitSourceControl {
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }
}
