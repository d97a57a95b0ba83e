//! Ignore rules
//!
//! - `pattern`: shell-style glob patterns matched against path components
//! - `matcher`: the rule set loaded from `.witignore` plus the built-in exclusions

pub mod matcher;
pub mod pattern;
