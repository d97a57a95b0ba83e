//! Commit history listing for `wit log`
//!
//! Commit ids are random, so the history is ordered by commit timestamp,
//! newest first. Every listing is recomputed from the persisted commits.

pub mod commit_log;
