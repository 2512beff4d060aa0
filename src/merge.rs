//! # Merge-Clone
//!
//! Materializes a remote repository into an existing directory.
//!
//! ## Process
//!
//! 1.  **Scratch directory**: a uniquely named, hidden child of the destination
//!     is created (`.repo-bridge-XXXXXX`). The random suffix means an
//!     unrelated user directory can never be mistaken for it.
//!
//! 2.  **Clone**: the repository is cloned into the scratch directory, so the
//!     clone target is always empty regardless of what the destination holds.
//!
//! 3.  **Move**: every direct child of the scratch directory, hidden entries
//!     such as `.git` included, is renamed into the destination. Whole
//!     subtrees move with their top-level entry; nothing is merged file by
//!     file.
//!
//! 4.  **Overwrite**: when the destination already has an entry with the same
//!     name, that entry is removed entirely first. The repository's version
//!     always wins.
//!
//! 5.  **Cleanup**: the scratch directory is removed whether or not the
//!     earlier steps succeeded. If cleanup fails after an earlier error, the
//!     cleanup failure is only logged and the earlier error is returned.
//!
//! Running the merge twice against the same repository leaves the
//! destination in the same state as running it once.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::defaults::TEMP_DIR_PREFIX;
use crate::error::{Error, Result};
use crate::repository::SourceControl;

/// What a merge-clone did to the destination directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Top-level entries moved into the destination, in name order.
    pub moved: Vec<String>,
    /// The subset of `moved` that replaced an existing entry.
    pub overwritten: Vec<String>,
}

impl MergeReport {
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Clone `url` and merge its top-level entries into `dest`, replacing any
/// entries that collide by name.
pub fn merge_clone(git: &dyn SourceControl, url: &str, dest: &Path) -> Result<MergeReport> {
    let scratch = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir_in(dest)
        .map_err(|e| Error::Merge {
            operation: "create scratch directory in",
            path: dest.display().to_string(),
            source: e,
        })?;
    let scratch_display = scratch.path().display().to_string();
    debug!("Cloning {} into {}", url, scratch_display);

    let outcome = git
        .clone_repository(url, scratch.path())
        .and_then(|()| move_entries(scratch.path(), dest));

    match outcome {
        Ok(report) => {
            scratch.close().map_err(|e| Error::Merge {
                operation: "remove scratch directory",
                path: scratch_display,
                source: e,
            })?;
            Ok(report)
        }
        Err(err) => {
            if let Err(cleanup) = scratch.close() {
                warn!(
                    "Failed to remove scratch directory {}: {}",
                    scratch_display, cleanup
                );
            }
            Err(err)
        }
    }
}

/// Move every direct child of `src` into `dest`, last write wins.
pub fn move_entries(src: &Path, dest: &Path) -> Result<MergeReport> {
    let mut entries = fs::read_dir(src)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = MergeReport::default();

    for entry in entries {
        let name = entry.file_name();
        let display = name.to_string_lossy().into_owned();
        let target = dest.join(&name);

        // symlink_metadata so a dangling symlink still counts as occupying the name
        if fs::symlink_metadata(&target).is_ok() {
            info!("File or folder already exists. Overwriting: {}", display);
            remove_entry(&target).map_err(|e| Error::Merge {
                operation: "remove existing",
                path: target.display().to_string(),
                source: e,
            })?;
            report.overwritten.push(display.clone());
        }

        fs::rename(entry.path(), &target).map_err(|e| Error::Merge {
            operation: "move",
            path: target.display().to_string(),
            source: e,
        })?;
        debug!("Moved {}", display);
        report.moved.push(display);
    }

    Ok(report)
}

/// Remove a file, symlink or whole directory tree.
fn remove_entry(path: &Path) -> std::io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
