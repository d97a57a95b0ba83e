use crate::areas::content_store::ContentStore;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::errors::Result;
use std::path::Path;

/// Compares single files between the working directory, staging and HEAD
pub struct Inspector<'r> {
    repository: &'r Repository,
    head: Option<&'r CommitId>,
    content: ContentStore,
}

impl<'r> Inspector<'r> {
    pub fn new(repository: &'r Repository, head: Option<&'r CommitId>, content: ContentStore) -> Self {
        Inspector {
            repository,
            head,
            content,
        }
    }

    /// Staged file against the HEAD commit. Byte-identical content is not a
    /// change.
    pub fn check_staged_against_head(&self, path: &Path, in_head: bool) -> Result<IndexChangeType> {
        let head = match self.head {
            Some(head) if in_head => head,
            _ => return Ok(IndexChangeType::Added),
        };

        let staged = self.repository.staging().fingerprint(path)?;
        let committed = self.repository.history().fingerprint(head, path)?;

        if staged != committed {
            Ok(IndexChangeType::Modified)
        } else {
            Ok(IndexChangeType::None)
        }
    }

    /// Working copy of a tracked file against its staged version, or against
    /// HEAD when it is not staged. A tracked file is staged, in HEAD, or both.
    pub fn check_workspace(&self, path: &Path, is_staged: bool) -> Result<WorkspaceChangeType> {
        if !self.repository.storage().is_file(path) {
            return Ok(WorkspaceChangeType::Deleted);
        }

        let reference = match (is_staged, self.head) {
            (false, Some(head)) => self.repository.history().fingerprint(head, path)?,
            _ => self.repository.staging().fingerprint(path)?,
        };

        if self.content.fingerprint(path)? != reference {
            Ok(WorkspaceChangeType::Modified)
        } else {
            Ok(WorkspaceChangeType::None)
        }
    }
}
