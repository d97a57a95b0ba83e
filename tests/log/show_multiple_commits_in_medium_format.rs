use crate::common::command::{
    committed_repository_dir, head_commit_id, run_wit_command, wit_commit_at, wit_stdout,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_medium_format(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    let first_id = head_commit_id(root).expect("HEAD should be set after a commit");

    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    run_wit_command(root, &["add", "1.txt"]).assert().success();
    wit_commit_at(
        root,
        "Translate one\n\nSpanish reads better here.",
        "2023-01-02 08:15:00 +0100",
    )
    .assert()
    .success();
    let second_id = head_commit_id(root).expect("HEAD should be set after a commit");

    let log = wit_stdout(root, &["log"]);

    assert_eq!(
        log,
        format!(
            "commit {second_id} (HEAD)\n\
             Date:   Mon Jan 2 08:15:00 2023 +0100\n\
             \n\
             \x20   Translate one\n\
             \x20   \n\
             \x20   Spanish reads better here.\n\
             \n\
             commit {first_id}\n\
             Date:   Sun Jan 1 12:00:00 2023 +0000\n\
             \n\
             \x20   Initial commit\n\
             \n"
        )
    );

    Ok(())
}
