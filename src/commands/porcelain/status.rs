use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::Result;

// Terminology:
// - to be committed: staged files that are new or differ from HEAD
// - not staged: tracked files whose working copy differs from the staged
//   version (or the HEAD version when not staged), or that were deleted
// - untracked: working files that are neither staged nor in HEAD
impl Repository {
    pub fn status_info(&self) -> Result<StatusInfo> {
        self.ensure_initialized()?;

        self.status().initialize()
    }
}
