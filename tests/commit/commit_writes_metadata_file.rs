use crate::common::command::{committed_repository_dir, head_commit_id};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_writes_metadata_file_with_fixed_date(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    let commit_id = head_commit_id(root).expect("HEAD should be set after a commit");

    let metadata = read_file(
        &root
            .join(".wit")
            .join("repository")
            .join(&commit_id)
            .join("metadata"),
    );

    assert_eq!(
        metadata,
        format!("ID: {commit_id}\nDate: 2023-01-01T12:00:00.000000000Z\nMessage: Initial commit\n")
    );

    Ok(())
}
