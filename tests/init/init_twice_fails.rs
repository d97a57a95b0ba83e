use crate::common::command::{init_repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: wit repository already exists"));

    Ok(())
}
