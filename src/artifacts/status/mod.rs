//! Working directory status
//!
//! Status reconciles three file sets: the working directory, the staging area
//! and the HEAD commit.
//!
//! - `file_change`: change kinds and their labels
//! - `inspector`: per-file comparisons
//! - `status_info`: the three categories and their rendering

pub mod file_change;
pub mod inspector;
pub mod status_info;
