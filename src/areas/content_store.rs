//! Whole-file snapshots of file trees
//!
//! Content is stored as plain copies, never as deltas: a snapshot replaces the
//! destination subtree entirely and a restore is a straight copy back.

use crate::areas::storage::Storage;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;
use derive_new::new;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, Clone, new)]
pub struct ContentStore {
    storage: Arc<dyn Storage>,
}

impl ContentStore {
    pub fn fingerprint(&self, path: &Path) -> Result<Digest> {
        let data = self.storage.read(path)?;
        Ok(Digest::of(&data))
    }

    /// Copy a file or directory tree to `dest`, removing whatever was at `dest`
    /// first so no stale children of an older version survive.
    ///
    /// Entries for which `skip` returns true are left out, and directories that
    /// are skipped are not descended into. Returns the number of files copied.
    /// A failure part way leaves `dest` partially written.
    pub fn snapshot(&self, source: &Path, dest: &Path, skip: &dyn Fn(&Path) -> bool) -> Result<usize> {
        let files = self.collect_files(source, skip)?;

        self.storage.remove(dest)?;
        self.copy_files(source, dest, &files)
    }

    /// Copy every file below `source` into `dest` without clearing `dest`.
    /// Entries for which `skip` returns true are left out.
    pub fn restore(&self, source: &Path, dest: &Path, skip: &dyn Fn(&Path) -> bool) -> Result<usize> {
        let files = self
            .storage
            .list_files(source)?
            .into_iter()
            .filter(|file| !skip(file))
            .collect::<Vec<_>>();

        self.copy_files(source, dest, &files)
    }

    fn collect_files(&self, path: &Path, skip: &dyn Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
        if !self.storage.is_dir(path) {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut files = Vec::new();
        for child in self.storage.list_dir(path)? {
            if skip(&child) {
                continue;
            }
            files.extend(self.collect_files(&child, skip)?);
        }

        Ok(files)
    }

    fn copy_files(&self, source: &Path, dest: &Path, files: &[PathBuf]) -> Result<usize> {
        for file in files {
            let target = match file.strip_prefix(source) {
                Ok(relative) if !relative.as_os_str().is_empty() => dest.join(relative),
                _ => dest.to_path_buf(),
            };

            let data = self.storage.read(file)?;
            self.storage.write(&target, &data)?;
            trace!(from = %file.display(), to = %target.display(), "copied file");
        }

        Ok(files.len())
    }
}
