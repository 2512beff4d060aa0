use std::fs;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Clone a repository (full history) into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
///
/// `target_dir` must be absent or empty; git refuses anything else.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    if let Some(parent) = target_dir.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    debug!("Running git clone {} {}", url, target_dir.display());

    let output = Command::new("git")
        .args(["clone", "--quiet", url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::CommandSpawn {
            program: "git".to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::GitClone {
            url: url.to_string(),
            hint: auth_hint(&stderr),
            message: stderr,
        });
    }

    Ok(())
}

/// Hint for clone failures that look like missing credentials.
fn auth_hint(stderr: &str) -> Option<String> {
    let looks_like_auth = stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository");

    looks_like_auth.then(|| {
        "make sure you have access to the repository:\n\
         - an SSH key added to ssh-agent and registered with the host\n\
         - git credentials configured\n\
         - `gh auth status` reports you as logged in"
            .to_string()
    })
}
