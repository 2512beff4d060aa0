//! Thin wrappers around the `gh` CLI.
//!
//! Authentication is entirely `gh`'s concern: whatever `gh auth login`
//! configured is used as-is, and auth failures surface as command errors.

use std::process::Command;

use log::debug;

use crate::error::{Error, Result};
use crate::repository::RepositoryId;

const GH: &str = "gh";

/// `jq` filter reducing each listed repository to `{name, description}`,
/// one JSON object per line.
pub fn listing_filter(is_template: bool) -> String {
    format!(
        ".[] | select(.is_template=={}) | {{name: .name, description: .description}}",
        is_template
    )
}

/// Arguments for the paginated organization listing.
pub fn list_args(org: &str, is_template: bool) -> Vec<String> {
    vec![
        "api".to_string(),
        format!("orgs/{}/repos", org),
        "--paginate".to_string(),
        "--jq".to_string(),
        listing_filter(is_template),
    ]
}

/// Arguments for creating a public repository, optionally from a template.
pub fn create_args(repo: &RepositoryId, template: Option<&RepositoryId>) -> Vec<String> {
    let mut args = vec!["repo".to_string(), "create".to_string(), repo.slug()];
    if let Some(template) = template {
        args.push("--template".to_string());
        args.push(template.slug());
    }
    args.push("--public".to_string());
    args
}

/// List the organization's repositories, returning raw line-delimited JSON.
pub fn list_repositories(org: &str, is_template: bool) -> Result<String> {
    run(&list_args(org, is_template))
}

/// Create a repository under the organization.
pub fn create_repository(repo: &RepositoryId, template: Option<&RepositoryId>) -> Result<()> {
    let stdout = run(&create_args(repo, template))?;
    if !stdout.trim().is_empty() {
        debug!("gh: {}", stdout.trim());
    }
    Ok(())
}

/// Run `gh` with the given arguments and return its stdout.
fn run(args: &[String]) -> Result<String> {
    debug!("Running {} {}", GH, args.join(" "));

    let output = Command::new(GH)
        .args(args)
        .output()
        .map_err(|e| Error::CommandSpawn {
            program: GH.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::Command {
            program: GH.to_string(),
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
