use crate::common::command::{init_repository_dir, wit_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(wit_stdout(init_repository_dir.path(), &["log"]), "No commits yet.\n");

    Ok(())
}
