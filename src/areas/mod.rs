//! Persisted repository state
//!
//! - `storage`: filesystem capability with disk and in-memory backends
//! - `content_store`: whole-file snapshot and restore of file trees
//! - `workspace`: the working directory seen through the ignore rules
//! - `staging`: files staged for the next commit
//! - `history`: immutable commit snapshots
//! - `refs`: the HEAD pointer
//! - `repository`: ties the areas together for one working directory

pub mod content_store;
pub mod history;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod storage;
pub mod workspace;
