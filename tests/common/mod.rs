//! Shared test utilities for integration and E2E tests.
//!
//! The binary shells out to `gh` and `git`. `TestFixture` puts fake versions
//! of both on `PATH` so the full flow runs without network access: the fake
//! `gh` answers listings from canned JSON lines and logs every call, and the
//! fake `git` "clones" by writing a small tree into the target directory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_templates(&[("wp-starter", Some("Starter"))]);
//! fixture.command().arg("--help").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Temporary working directory plus a directory of fake `gh`/`git` scripts.
pub struct TestFixture {
    workdir: assert_fs::TempDir,
    tools: assert_fs::TempDir,
    templates: Vec<String>,
    projects: Vec<String>,
    create_status: i32,
}

impl TestFixture {
    /// Create a fixture with an empty working directory and empty listings.
    pub fn new() -> Self {
        Self {
            workdir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            tools: assert_fs::TempDir::new().expect("Failed to create tools directory"),
            templates: Vec::new(),
            projects: Vec::new(),
            create_status: 0,
        }
    }

    /// Template repositories the fake `gh` lists.
    pub fn with_templates(mut self, repos: &[(&str, Option<&str>)]) -> Self {
        self.templates = repos.iter().map(|(n, d)| listing_line(n, *d)).collect();
        self
    }

    /// Non-template repositories the fake `gh` lists.
    pub fn with_projects(mut self, repos: &[(&str, Option<&str>)]) -> Self {
        self.projects = repos.iter().map(|(n, d)| listing_line(n, *d)).collect();
        self
    }

    /// Make `gh repo create` exit with this status.
    pub fn with_create_status(mut self, status: i32) -> Self {
        self.create_status = status;
        self
    }

    /// Add a file to the working directory.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.workdir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Path to the working directory the binary runs in.
    pub fn path(&self) -> &Path {
        self.workdir.path()
    }

    /// Every `gh`/`git` invocation, one per line.
    pub fn tool_log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Directory holding the fake tools; prepend it to `PATH`.
    #[cfg(unix)]
    pub fn install_tools(&self) -> PathBuf {
        let log = self.log_path();
        let templates = self.templates.join("\n");
        let projects = self.projects.join("\n");

        let gh = format!(
            r#"#!/bin/sh
echo "gh $*" >> '{log}'
case "$1" in
  api)
    case "$*" in
      *"is_template==true"*) printf '%s' '{templates}' ;;
      *) printf '%s' '{projects}' ;;
    esac
    ;;
  repo)
    if [ {status} -ne 0 ]; then
      echo "GraphQL: Name already exists on this account" >&2
      exit {status}
    fi
    ;;
esac
"#,
            log = log.display(),
            templates = templates,
            projects = projects,
            status = self.create_status,
        );

        // git clone --quiet <url> <dir>
        let git = format!(
            r#"#!/bin/sh
echo "git $*" >> '{log}'
url="$3"
dir="$4"
mkdir -p "$dir/.github" "$dir/plugins"
echo "$url" > "$dir/README.md"
echo "new" > "$dir/plugins/new.php"
"#,
            log = log.display(),
        );

        self.write_tool("gh", &gh);
        self.write_tool("git", &git);
        self.tools.path().to_path_buf()
    }

    /// `PATH` value with the fake tools first.
    #[cfg(unix)]
    pub fn tool_path(&self) -> String {
        let tools = self.install_tools();
        let system = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", tools.display(), system)
    }

    /// Create a command for the binary running in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_repo-bridge"));
        cmd.current_dir(self.path())
            .env_remove("REPO_BRIDGE_ORG")
            .env_remove("REPO_BRIDGE_HOST")
            .env_remove("RUST_LOG");
        cmd
    }

    fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    #[cfg(unix)]
    fn write_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.path().join(name);
        std::fs::write(&path, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn listing_line(name: &str, description: Option<&str>) -> String {
    serde_json::json!({ "name": name, "description": description }).to_string()
}
