//! Porcelain commands
//!
//! - `init`: create the `.wit` control directory
//! - `add`: stage a file or directory
//! - `ignore`: append a rule to `.witignore`
//! - `commit`: snapshot staging into a new commit
//! - `status`: classify working directory changes
//! - `log`: list commits, newest first
//! - `checkout`: replace the working directory with a commit

pub mod add;
pub mod checkout;
pub mod commit;
pub mod ignore;
pub mod init;
pub mod log;
pub mod status;
