use crate::common::command::{
    committed_repository_dir, head_commit_id, run_wit_command, wit_commit, wit_stdout,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_then_status_is_clean(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    let first_id = head_commit_id(root).expect("HEAD should be set after a commit");

    write_file(FileSpec::new(root.join("a").join("2.txt"), "dos".to_string()));
    run_wit_command(root, &["add", "a"]).assert().success();
    wit_commit(root, "Translate two").assert().success();

    // unstaged edits and untracked files are discarded
    write_file(FileSpec::new(root.join("1.txt"), "edited".to_string()));
    write_file(FileSpec::new(root.join("scratch.txt"), "scratch".to_string()));

    run_wit_command(root, &["checkout", &first_id])
        .assert()
        .success();

    assert_eq!(wit_stdout(root, &["status", "--porcelain"]), "");

    Ok(())
}
