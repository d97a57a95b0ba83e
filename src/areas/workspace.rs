use crate::areas::storage::Storage;
use crate::artifacts::ignore::matcher::IgnoreMatcher;
use crate::errors::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// The live working directory, seen through the ignore rules
#[derive(Debug)]
pub struct Workspace {
    storage: Arc<dyn Storage>,
    matcher: IgnoreMatcher,
}

impl Workspace {
    pub fn new(storage: Arc<dyn Storage>, matcher: IgnoreMatcher) -> Self {
        Workspace { storage, matcher }
    }

    pub fn matcher(&self) -> &IgnoreMatcher {
        &self.matcher
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.matcher.is_ignored(path)
    }

    /// Every non-ignored file, as root-relative paths
    pub fn list_files(&self) -> Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        self.collect_files(Path::new(""), &mut files)?;

        Ok(files)
    }

    fn collect_files(&self, dir_path: &Path, files: &mut BTreeSet<PathBuf>) -> Result<()> {
        for path in self.storage.list_dir(dir_path)? {
            if self.is_ignored(&path) {
                continue;
            }

            if self.storage.is_dir(&path) {
                self.collect_files(&path, files)?;
            } else {
                files.insert(path);
            }
        }

        Ok(())
    }

    /// Delete every non-ignored entry. Directories are removed once empty; a
    /// directory still holding ignored content is kept. Returns the number of
    /// files deleted.
    pub fn clear(&self) -> Result<usize> {
        let (removed, _) = self.clear_directory(Path::new(""))?;
        debug!(removed, "cleared working directory");

        Ok(removed)
    }

    fn clear_directory(&self, dir_path: &Path) -> Result<(usize, bool)> {
        let mut removed = 0;
        let mut kept_entries = false;

        for path in self.storage.list_dir(dir_path)? {
            if self.is_ignored(&path) {
                kept_entries = true;
                continue;
            }

            if self.storage.is_dir(&path) {
                let (removed_below, is_empty) = self.clear_directory(&path)?;
                removed += removed_below;

                if is_empty {
                    self.storage.remove(&path)?;
                } else {
                    kept_entries = true;
                }
            } else {
                self.storage.remove(&path)?;
                removed += 1;
            }
        }

        Ok((removed, !kept_entries))
    }
}
