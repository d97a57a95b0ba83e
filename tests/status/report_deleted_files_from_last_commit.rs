use crate::common::command::{committed_repository_dir, wit_stdout};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_from_last_commit(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    delete_path(&root.join("1.txt"));
    delete_path(&root.join("a").join("b"));

    let status = wit_stdout(root, &["status", "--porcelain"]);

    assert_eq!(status, " D 1.txt\n D a/b/3.txt\n");

    Ok(())
}
