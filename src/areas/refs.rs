//! HEAD reference
//!
//! The references file holds a single line `HEAD=<commit-id>`, or nothing at all
//! before the first commit.

use crate::areas::storage::Storage;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key of the HEAD entry in the references file
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the references file (`.wit/references`)
    path: Box<Path>,
    storage: Arc<dyn Storage>,
}

impl Refs {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_head(&self) -> Result<Option<CommitId>> {
        if !self.storage.is_file(&self.path) {
            return Ok(None);
        }

        let content = self.storage.read(&self.path)?;
        let content = String::from_utf8_lossy(&content);

        let Some(value) = content
            .lines()
            .find_map(|line| line.trim().strip_prefix(HEAD_REF_NAME)?.strip_prefix('='))
        else {
            return Ok(None);
        };

        let head = CommitId::try_parse(value);
        if head.is_none() && !value.trim().is_empty() {
            warn!(value, "ignoring malformed HEAD reference");
        }

        Ok(head)
    }

    pub fn update_head(&self, id: &CommitId) -> Result<()> {
        self.storage
            .write(&self.path, format!("{HEAD_REF_NAME}={id}").as_bytes())?;
        debug!(head = %id, "updated HEAD");

        Ok(())
    }

    /// Write an empty references file, meaning no HEAD yet
    pub fn reset(&self) -> Result<()> {
        self.storage.write(&self.path, b"")
    }
}
