use crate::common::command::{
    committed_repository_dir, head_commit_id, run_wit_command, wit_commit_at, wit_stdout,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn mark_head_after_checkout(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    let first_id = head_commit_id(root).expect("HEAD should be set after a commit");

    write_file(FileSpec::new(root.join("5.txt"), "five".to_string()));
    run_wit_command(root, &["add", "5.txt"]).assert().success();
    wit_commit_at(root, "Add five", "2024-05-05 05:05:05 +0000")
        .assert()
        .success();
    let second_id = head_commit_id(root).expect("HEAD should be set after a commit");

    run_wit_command(root, &["checkout", &first_id])
        .assert()
        .success();

    assert_eq!(
        wit_stdout(root, &["log", "--oneline"]),
        format!("{second_id} Add five\n{first_id} (HEAD) Initial commit\n")
    );

    Ok(())
}
