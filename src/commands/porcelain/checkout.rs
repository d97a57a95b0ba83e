use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Result, WitError};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    id: CommitId,
    restored: usize,
}

impl CheckoutOutcome {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn restored(&self) -> usize {
        self.restored
    }
}

impl std::fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HEAD is now at {}", self.id)
    }
}

impl Repository {
    /// Replace the working directory with the files of commit `target`.
    ///
    /// Every non-ignored entry is deleted before the commit is copied back,
    /// so a failure in between leaves the working directory partially
    /// restored.
    pub fn checkout(&self, target: &str) -> Result<CheckoutOutcome> {
        self.ensure_initialized()?;

        if !self.staging().is_empty()? {
            return Err(WitError::UncommittedChanges);
        }

        let id = CommitId::try_parse(target)
            .filter(|id| self.history().contains(id))
            .ok_or_else(|| WitError::CommitNotFound {
                id: target.to_string(),
            })?;

        let workspace = self.workspace()?;
        let removed = workspace.clear()?;
        let restored = self.history().restore(&id, Path::new(""))?;
        self.refs().update_head(&id)?;

        info!(id = %id, removed, restored, "checked out commit");

        Ok(CheckoutOutcome { id, restored })
    }
}
