use crate::CONTROL_DIR;
use crate::areas::content_store::ContentStore;
use crate::areas::history::CommitHistory;
use crate::areas::refs::Refs;
use crate::areas::staging::StagingArea;
use crate::areas::storage::{DiskStorage, Storage};
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::matcher::IgnoreMatcher;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::status_info::Status;
use crate::errors::{Result, WitError};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

const STAGING_DIR: &str = "staging";
const HISTORY_DIR: &str = "repository";
const REFERENCES_FILE: &str = "references";

/// Handle on one working directory and its `.wit` control directory
///
/// Every operation goes through the [`Storage`] held here, so a repository can
/// live on disk or entirely in memory.
#[derive(Debug)]
pub struct Repository {
    storage: Arc<dyn Storage>,
    staging: StagingArea,
    history: CommitHistory,
    refs: Refs,
}

impl Repository {
    /// Open the working directory at `path` on disk. The directory must exist.
    pub fn open(path: &Path) -> Result<Self> {
        let path = path.canonicalize().map_err(|e| WitError::io(path, e))?;

        Ok(Self::with_storage(Arc::new(DiskStorage::new(
            path.into_boxed_path(),
        ))))
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        let control_dir = Path::new(CONTROL_DIR);

        let staging = StagingArea::new(
            control_dir.join(STAGING_DIR).into_boxed_path(),
            storage.clone(),
        );
        let history = CommitHistory::new(
            control_dir.join(HISTORY_DIR).into_boxed_path(),
            storage.clone(),
        );
        let refs = Refs::new(
            control_dir.join(REFERENCES_FILE).into_boxed_path(),
            storage.clone(),
        );

        Repository {
            storage,
            staging,
            history,
            refs,
        }
    }

    pub fn path(&self) -> &Path {
        self.storage.root()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(self.storage.clone())
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn history(&self) -> &CommitHistory {
        &self.history
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_dir(Path::new(CONTROL_DIR))
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(WitError::NotInitialized)
        }
    }

    /// The working directory with the current ignore rules loaded
    pub fn workspace(&self) -> Result<Workspace> {
        let matcher = IgnoreMatcher::load(self.storage.as_ref())?;
        Ok(Workspace::new(self.storage.clone(), matcher))
    }

    /// HEAD, provided it names a commit that actually exists
    pub fn head_commit(&self) -> Result<Option<CommitId>> {
        match self.refs.read_head()? {
            Some(id) if self.history.contains(&id) => Ok(Some(id)),
            Some(id) => {
                warn!(head = %id, "HEAD points to a missing commit");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    /// Turn a user supplied path into one relative to the working-directory
    /// root. Relative paths are taken from `cwd`; `.` and `..` are resolved
    /// lexically. Paths outside the root are reported as not found.
    pub fn relative_path(&self, cwd: &Path, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in absolute.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }

        normalized
            .strip_prefix(self.path())
            .map(Path::to_path_buf)
            .map_err(|_| WitError::PathNotFound {
                path: path.to_path_buf(),
            })
    }
}
