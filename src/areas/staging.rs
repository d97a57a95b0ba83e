//! Staging area
//!
//! The staging tree under `.wit/staging` mirrors working-directory relative
//! paths. Only files are entries; directories exist just to hold them.

use crate::areas::content_store::ContentStore;
use crate::areas::storage::Storage;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct StagingArea {
    path: Box<Path>,
    storage: Arc<dyn Storage>,
    content: ContentStore,
}

impl StagingArea {
    pub fn new(path: Box<Path>, storage: Arc<dyn Storage>) -> Self {
        let content = ContentStore::new(storage.clone());
        StagingArea {
            path,
            storage,
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy a working-directory file or subtree into staging, replacing any
    /// previously staged version of the same path. Ignored entries inside a
    /// subtree are left out. Returns the number of files staged.
    pub fn stage(&self, path: &Path, workspace: &Workspace) -> Result<usize> {
        self.discard_conflicts(path)?;

        let dest = self.location_of(path);
        let staged = self
            .content
            .snapshot(path, &dest, &|entry| workspace.is_ignored(entry))?;
        self.storage.create_dir_all(&self.path)?;

        debug!(path = %path.display(), files = staged, "staged path");
        Ok(staged)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list_files()?.is_empty())
    }

    /// Staged files as working-directory relative paths
    pub fn list_files(&self) -> Result<BTreeSet<PathBuf>> {
        Ok(self
            .storage
            .list_files(&self.path)?
            .into_iter()
            .filter_map(|file| file.strip_prefix(&self.path).ok().map(Path::to_path_buf))
            .collect())
    }

    pub fn fingerprint(&self, path: &Path) -> Result<Digest> {
        self.content.fingerprint(&self.location_of(path))
    }

    /// Drop all staged content, keeping the empty staging directory
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.path)?;
        self.storage.create_dir_all(&self.path)
    }

    // a staged file standing where a parent directory of `path` now is
    fn discard_conflicts(&self, path: &Path) -> Result<()> {
        for parent in path.ancestors().skip(1) {
            if parent.as_os_str().is_empty() {
                break;
            }

            let location = self.location_of(parent);
            if self.storage.is_file(&location) {
                self.storage.remove(&location)?;
            }
        }

        Ok(())
    }

    fn location_of(&self, path: &Path) -> PathBuf {
        if path.as_os_str().is_empty() {
            self.path.to_path_buf()
        } else {
            self.path.join(path)
        }
    }
}
