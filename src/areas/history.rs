//! Commit history
//!
//! Every commit is a directory `.wit/repository/<id>/` holding a full copy of
//! the staged files plus a `metadata` file. Commits are never modified once
//! written.

use crate::areas::content_store::ContentStore;
use crate::areas::staging::StagingArea;
use crate::areas::storage::Storage;
use crate::artifacts::objects::commit::{Commit, METADATA_FILE};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, WitError};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct CommitHistory {
    path: Box<Path>,
    storage: Arc<dyn Storage>,
    content: ContentStore,
}

impl CommitHistory {
    pub fn new(path: Box<Path>, storage: Arc<dyn Storage>) -> Self {
        let content = ContentStore::new(storage.clone());
        CommitHistory {
            path,
            storage,
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A commit exists once its metadata file has been written
    pub fn contains(&self, id: &CommitId) -> bool {
        self.storage
            .is_file(&self.commit_path(id).join(METADATA_FILE))
    }

    /// Snapshot the staging area into a new commit. Staging itself is left
    /// untouched; clearing it is the caller's job once HEAD has moved.
    pub fn create(
        &self,
        message: String,
        timestamp: DateTime<FixedOffset>,
        staging: &StagingArea,
    ) -> Result<Commit> {
        let id = self.fresh_id();
        let commit = Commit::new(id, message, timestamp);
        let commit_path = self.commit_path(commit.id());

        let written = self
            .content
            .snapshot(staging.path(), &commit_path, &|_| false)
            .and_then(|files| {
                self.storage
                    .write(
                        &commit_path.join(METADATA_FILE),
                        commit.to_metadata().as_bytes(),
                    )
                    .map(|_| files)
            });

        let files = match written {
            Ok(files) => files,
            Err(e) => {
                warn!(id = %commit.id(), "discarding incomplete commit");
                self.storage.remove(&commit_path)?;
                return Err(e);
            }
        };

        debug!(id = %commit.id(), files, "created commit");
        Ok(commit)
    }

    pub fn load(&self, id: &CommitId) -> Result<Commit> {
        let metadata_path = self.commit_path(id).join(METADATA_FILE);
        if !self.storage.is_file(&metadata_path) {
            return Err(WitError::CommitNotFound { id: id.to_string() });
        }

        let content = self.storage.read(&metadata_path)?;
        Commit::from_metadata(&String::from_utf8_lossy(&content))
            .ok_or_else(|| WitError::CommitNotFound { id: id.to_string() })
    }

    /// All readable commits, newest first. Ties on the timestamp fall back to
    /// the id so the order is stable between runs.
    pub fn list(&self) -> Result<Vec<Commit>> {
        if !self.storage.is_dir(&self.path) {
            return Ok(Vec::new());
        }

        let mut commits = Vec::new();
        for entry in self.storage.list_dir(&self.path)? {
            let Some(id) = entry
                .file_name()
                .and_then(|name| CommitId::try_parse(&name.to_string_lossy()))
            else {
                continue;
            };

            match self.load(&id) {
                Ok(commit) => commits.push(commit),
                Err(WitError::CommitNotFound { .. }) => {
                    warn!(id = %id, "skipping commit without readable metadata");
                }
                Err(e) => return Err(e),
            }
        }

        commits.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(commits)
    }

    /// Files recorded in a commit, as working-directory relative paths
    pub fn list_files(&self, id: &CommitId) -> Result<BTreeSet<PathBuf>> {
        let commit_path = self.commit_path(id);

        Ok(self
            .storage
            .list_files(&commit_path)?
            .into_iter()
            .filter_map(|file| file.strip_prefix(&commit_path).ok().map(Path::to_path_buf))
            .filter(|file| file != Path::new(METADATA_FILE))
            .collect())
    }

    pub fn fingerprint(&self, id: &CommitId, path: &Path) -> Result<Digest> {
        self.content.fingerprint(&self.commit_path(id).join(path))
    }

    /// Copy a commit's files into `dest`. Returns the number of files written.
    pub fn restore(&self, id: &CommitId, dest: &Path) -> Result<usize> {
        let commit_path = self.commit_path(id);
        let metadata_path = commit_path.join(METADATA_FILE);

        self.content
            .restore(&commit_path, dest, &|file| file == metadata_path.as_path())
    }

    fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    fn fresh_id(&self) -> CommitId {
        loop {
            let id = CommitId::generate();
            if !self.storage.exists(&self.commit_path(&id)) {
                return id;
            }

            debug!(id = %id, "commit id collision, drawing another");
        }
    }
}
