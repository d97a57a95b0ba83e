use crate::areas::storage::Storage;
use crate::errors::{Result, WitError};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct DiskStorage {
    path: Box<Path>,
}

impl DiskStorage {
    pub fn new(path: Box<Path>) -> Self {
        DiskStorage { path }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.path.join(path)
    }

    fn relative(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }

    fn create_parent_dirs(&self, path: &Path) -> Result<()> {
        if let Some(parent) = self.absolute(path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| WitError::io(parent, e))?;
        }

        Ok(())
    }
}

impl Storage for DiskStorage {
    fn root(&self) -> &Path {
        &self.path
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(self.absolute(path)).is_ok()
    }

    // symbolic links are never treated as directories, so tree walks and
    // removals stay inside the working directory
    fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(self.absolute(path))
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(self.absolute(path)).map_err(|e| WitError::io(path, e))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.create_parent_dirs(path)?;

        std::fs::write(self.absolute(path), data).map_err(|e| WitError::io(path, e))
    }

    fn append(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.create_parent_dirs(path)?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.absolute(path))
            .map_err(|e| WitError::io(path, e))?;

        file.write_all(data).map_err(|e| WitError::io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(self.absolute(path)).map_err(|e| WitError::io(path, e))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let absolute = self.absolute(path);

        let metadata = match std::fs::symlink_metadata(&absolute) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(WitError::io(path, e)),
        };

        if metadata.is_dir() {
            std::fs::remove_dir_all(&absolute).map_err(|e| WitError::io(path, e))
        } else {
            std::fs::remove_file(&absolute).map_err(|e| WitError::io(path, e))
        }
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut children = std::fs::read_dir(self.absolute(path))
            .map_err(|e| WitError::io(path, e))?
            .map(|entry| {
                entry
                    .map(|entry| path.join(entry.file_name()))
                    .map_err(|e| WitError::io(path, e))
            })
            .collect::<Result<Vec<_>>>()?;
        children.sort();

        Ok(children)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.exists(path) {
            return Ok(Vec::new());
        }

        WalkDir::new(self.absolute(path))
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if !entry.file_type().is_dir() => {
                    self.relative(entry.path()).map(Ok)
                }
                Ok(_) => None,
                Err(e) => {
                    let failed_path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                    Some(Err(WitError::io(failed_path, source)))
                }
            })
            .collect()
    }
}
