use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by repository operations
///
/// None of them are fatal to the process; the caller decides how to report them.
#[derive(Debug, Error)]
pub enum WitError {
    #[error("not a wit repository (run 'wit init' first)")]
    NotInitialized,

    #[error("wit repository already exists in {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    #[error("path '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("nothing to commit (staging area is empty)")]
    NothingToCommit,

    #[error("commit '{id}' not found")]
    CommitNotFound { id: String },

    #[error("you have staged changes; commit them before checking out another commit")]
    UncommittedChanges,

    #[error("'{}' is reserved for commit metadata and cannot be staged", path.display())]
    ReservedPath { path: PathBuf },

    /// Any filesystem failure; a multi-file operation is left where it stopped
    #[error("I/O failure on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WitError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WitError>;
