//! Value types and algorithms
//!
//! - `core`: shared utilities (pager wrapper)
//! - `ignore`: glob rules and the ignore matcher
//! - `log`: commit history listing
//! - `objects`: digests, commit ids and commit metadata
//! - `status`: change classification and rendering

pub mod core;
pub mod ignore;
pub mod log;
pub mod objects;
pub mod status;
