//! wit - a small single-user version control engine
//!
//! The crate is organized the same way the command line tool is used:
//!
//! - `areas`: persisted state (working directory, staging area, commit history, HEAD)
//! - `artifacts`: value types and algorithms (ignore rules, digests, commits, status, log)
//! - `commands`: user-facing operations, implemented on [`Repository`]
//!
//! Every operation runs synchronously against on-disk state and either returns a
//! renderable outcome or a [`WitError`] describing why it failed.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use areas::storage::{DiskStorage, MemoryStorage, Storage};
pub use errors::{Result, WitError};

/// Name of the repository control directory at the working-directory root
pub const CONTROL_DIR: &str = ".wit";

/// Name of the user-editable ignore rule file at the working-directory root
pub const IGNORE_FILE: &str = ".witignore";
