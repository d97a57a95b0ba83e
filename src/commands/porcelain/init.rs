use crate::areas::repository::Repository;
use crate::errors::{Result, WitError};
use crate::{CONTROL_DIR, IGNORE_FILE};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    path: PathBuf,
}

impl InitOutcome {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Initialized empty wit repository in {}",
            self.path.join(CONTROL_DIR).display()
        )
    }
}

impl Repository {
    pub fn init(&self) -> Result<InitOutcome> {
        if self.is_initialized() {
            return Err(WitError::AlreadyInitialized {
                path: self.path().to_path_buf(),
            });
        }

        self.storage().create_dir_all(self.staging().path())?;
        self.storage().create_dir_all(self.history().path())?;
        self.refs().reset()?;

        let ignore_file = Path::new(IGNORE_FILE);
        if !self.storage().exists(ignore_file) {
            self.storage().write(ignore_file, b"")?;
        }

        info!(path = %self.path().display(), "initialized repository");

        Ok(InitOutcome {
            path: self.path().to_path_buf(),
        })
    }
}
