use crate::areas::storage::Storage;
use crate::errors::{Result, WitError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
}

/// In-memory [`Storage`] backend
///
/// The root directory always exists. Data is lost when the storage is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    root: PathBuf,
    nodes: RwLock<BTreeMap<PathBuf, Node>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage reporting `root` as its location, so that user paths can be
    /// resolved against it
    pub fn with_root(root: &Path) -> Self {
        MemoryStorage {
            root: root.to_path_buf(),
            nodes: RwLock::default(),
        }
    }

    fn read_nodes(&self, path: &Path) -> Result<RwLockReadGuard<'_, BTreeMap<PathBuf, Node>>> {
        self.nodes
            .read()
            .map_err(|e| WitError::io(path, std::io::Error::other(format!("lock poisoned: {e}"))))
    }

    fn write_nodes(&self, path: &Path) -> Result<RwLockWriteGuard<'_, BTreeMap<PathBuf, Node>>> {
        self.nodes
            .write()
            .map_err(|e| WitError::io(path, std::io::Error::other(format!("lock poisoned: {e}"))))
    }

    fn is_root(path: &Path) -> bool {
        path.as_os_str().is_empty()
    }

    fn not_found(path: &Path) -> WitError {
        WitError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        )
    }

    fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) -> Result<()> {
        for ancestor in path.ancestors().collect::<Vec<_>>().into_iter().rev() {
            if Self::is_root(ancestor) {
                continue;
            }

            match nodes.get(ancestor) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(WitError::io(
                        ancestor,
                        std::io::Error::other("not a directory"),
                    ));
                }
                None => {
                    nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8], append: bool) -> Result<()> {
        let mut nodes = self.write_nodes(path)?;

        if let Some(parent) = path.parent() {
            Self::insert_dirs(&mut nodes, parent)?;
        }

        match nodes.get_mut(path) {
            Some(Node::Dir) => Err(WitError::io(
                path,
                std::io::Error::other("is a directory"),
            )),
            Some(Node::File(content)) if append => {
                content.extend_from_slice(data);
                Ok(())
            }
            _ => {
                nodes.insert(path.to_path_buf(), Node::File(data.to_vec()));
                Ok(())
            }
        }
    }
}

impl Storage for MemoryStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        Self::is_root(path)
            || self
                .read_nodes(path)
                .map(|nodes| nodes.contains_key(path))
                .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        Self::is_root(path)
            || self
                .read_nodes(path)
                .map(|nodes| matches!(nodes.get(path), Some(Node::Dir)))
                .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match self.read_nodes(path)?.get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(WitError::io(
                path,
                std::io::Error::other("is a directory"),
            )),
            None => Err(Self::not_found(path)),
        }
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.write_file(path, data, false)
    }

    fn append(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.write_file(path, data, true)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut nodes = self.write_nodes(path)?;
        Self::insert_dirs(&mut nodes, path)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let mut nodes = self.write_nodes(path)?;
        nodes.retain(|node_path, _| !node_path.starts_with(path));

        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(path) {
            return Err(Self::not_found(path));
        }

        Ok(self
            .read_nodes(path)?
            .keys()
            .filter(|node_path| node_path.parent() == Some(path))
            .cloned()
            .collect())
    }
}
