//! Objects recorded by the repository
//!
//! - **Digest**: SHA-1 fingerprint of file content, used for change detection
//! - **CommitId**: random 8 hex character commit name
//! - **Commit**: id, message and timestamp, persisted as a `metadata` file

pub mod commit;
pub mod commit_id;
pub mod digest;
