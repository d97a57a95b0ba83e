use crate::common::command::{init_repository_dir, run_wit_command};
use crate::common::file::list_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_non_existent_path_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error: path 'missing.txt' does not exist",
        ));

    assert!(list_files(&init_repository_dir.path().join(".wit").join("staging")).is_empty());

    Ok(())
}
