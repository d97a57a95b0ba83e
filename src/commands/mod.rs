//! wit command implementations
//!
//! Every user-facing operation lives in `porcelain` as an `impl Repository`
//! block returning a printable outcome.

pub mod porcelain;
