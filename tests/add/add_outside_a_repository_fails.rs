use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_outside_a_repository_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(repository_dir.path().join("a.txt"), "a".to_string()));

    run_wit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a wit repository"));

    assert!(!repository_dir.path().join(".wit").exists());

    Ok(())
}
