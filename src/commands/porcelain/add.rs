use crate::IGNORE_FILE;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::METADATA_FILE;
use crate::errors::{Result, WitError};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Staged {
        path: PathBuf,
        files: usize,
        is_dir: bool,
    },
    /// The path is excluded by an ignore rule; nothing was staged
    Ignored { path: PathBuf, rule: Option<String> },
}

impl AddOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, AddOutcome::Ignored { .. })
    }
}

fn display_path(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        ".".to_string()
    } else {
        path.display().to_string()
    }
}

impl std::fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOutcome::Staged {
                path,
                files,
                is_dir: true,
            } => write!(
                f,
                "Added directory '{}' to staging ({} file{})",
                display_path(path),
                files,
                if *files == 1 { "" } else { "s" }
            ),
            AddOutcome::Staged { path, .. } => {
                write!(f, "Added '{}' to staging", display_path(path))
            }
            AddOutcome::Ignored {
                path,
                rule: Some(rule),
            } => write!(
                f,
                "Ignoring '{}' (matches pattern '{}' in {})",
                path.display(),
                rule,
                IGNORE_FILE
            ),
            AddOutcome::Ignored { path, rule: None } => {
                write!(f, "Ignoring '{}' (always ignored)", path.display())
            }
        }
    }
}

impl Repository {
    /// Stage a working-directory path, relative to the repository root. The
    /// empty path stages the whole working directory.
    pub fn add(&self, path: &Path) -> Result<AddOutcome> {
        self.ensure_initialized()?;

        if !self.storage().exists(path) {
            return Err(WitError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let workspace = self.workspace()?;
        let is_root = path.as_os_str().is_empty();

        if !is_root && workspace.is_ignored(path) {
            info!(path = %path.display(), "skipping ignored path");
            return Ok(AddOutcome::Ignored {
                path: path.to_path_buf(),
                rule: workspace.matcher().matching_rule(path).map(str::to_string),
            });
        }

        // a root entry of this name, file or directory, collides with the
        // metadata file of every commit
        let metadata_path = Path::new(METADATA_FILE);
        if (is_root || path.starts_with(metadata_path))
            && self.storage().exists(metadata_path)
            && !workspace.is_ignored(metadata_path)
        {
            return Err(WitError::ReservedPath {
                path: metadata_path.to_path_buf(),
            });
        }

        let is_dir = self.storage().is_dir(path);
        let files = self.staging().stage(path, &workspace)?;
        info!(path = %path.display(), files, "added to staging");

        Ok(AddOutcome::Staged {
            path: path.to_path_buf(),
            files,
            is_dir,
        })
    }
}
