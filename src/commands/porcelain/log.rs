use crate::areas::repository::Repository;
use crate::artifacts::log::commit_log::{CommitLog, LogEntry};
use crate::errors::Result;

impl Repository {
    /// Commits newest first, with the one HEAD points to flagged
    pub fn log(&self) -> Result<Vec<LogEntry>> {
        self.ensure_initialized()?;

        CommitLog::new(self).entries()
    }
}
