//! Filesystem capability used by every repository area
//!
//! All paths handed to a [`Storage`] are relative to the working-directory root
//! (the empty path names the root itself). Two backends exist:
//!
//! - [`DiskStorage`]: the real filesystem under a root directory
//! - [`MemoryStorage`]: an in-memory tree, used to exercise the engine in tests

mod disk;
mod memory;

pub use disk::DiskStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Location of the root, for messages only
    fn root(&self) -> &Path;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path) && !self.is_dir(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create or truncate a file, creating missing parent directories
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Append to a file, creating it if needed
    fn append(&self, path: &Path, data: &[u8]) -> Result<()>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Remove a file or a whole directory tree. Removing a missing path is a no-op.
    fn remove(&self, path: &Path) -> Result<()>;

    /// Immediate children of a directory, sorted by name
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Every file below `path` (or `path` itself when it is a file), sorted
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(path) {
            return Ok(if self.exists(path) {
                vec![path.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        let mut files = Vec::new();
        for child in self.list_dir(path)? {
            files.extend(self.list_files(&child)?);
        }

        Ok(files)
    }
}
