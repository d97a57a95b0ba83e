use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::{Result, WitError};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    commit: Commit,
    is_root: bool,
}

impl CommitOutcome {
    pub fn commit(&self) -> &Commit {
        &self.commit
    }
}

impl std::fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}{}] {}",
            if self.is_root { "(root-commit) " } else { "" },
            self.commit.id(),
            self.commit.short_message()
        )
    }
}

impl Repository {
    pub fn commit(&self, message: &str) -> Result<CommitOutcome> {
        self.ensure_initialized()?;

        if self.staging().is_empty()? {
            return Err(WitError::NothingToCommit);
        }

        let is_root = self.head_commit()?.is_none();
        let commit = self.history().create(
            message.to_string(),
            Commit::timestamp_from_env(),
            self.staging(),
        )?;

        self.refs().update_head(commit.id())?;
        self.staging().clear()?;

        info!(id = %commit.id(), "created commit");

        Ok(CommitOutcome { commit, is_root })
    }
}
