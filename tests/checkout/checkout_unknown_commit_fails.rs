use crate::common::command::{committed_repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("0badc0de")]
#[case("not-an-id")]
fn checkout_unknown_commit_fails(
    committed_repository_dir: TempDir,
    #[case] target: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(committed_repository_dir.path(), &["checkout", target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "commit '{target}' not found"
        )));

    assert!(committed_repository_dir.path().join("1.txt").exists());

    Ok(())
}
