use crate::common::command::{committed_repository_dir, head_commit_id, run_wit_command, wit_commit};
use crate::common::file::{FileSpec, list_files, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_only_records_staged_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    write_file(FileSpec::new(root.join("a").join("2.txt"), "changed".to_string()));
    write_file(FileSpec::new(root.join("4.txt"), "four".to_string()));
    run_wit_command(root, &["add", "a/2.txt"]).assert().success();

    wit_commit(root, "Change two").assert().success();

    let commit_id = head_commit_id(root).expect("HEAD should be set after a commit");
    assert_eq!(
        list_files(&root.join(".wit").join("repository").join(commit_id)),
        vec!["a/2.txt", "metadata"]
    );

    Ok(())
}
