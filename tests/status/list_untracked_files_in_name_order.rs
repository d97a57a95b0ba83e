use crate::common::command::{init_repository_dir, wit_stdout};
use crate::common::file::{FileSpec, create_directory, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("file.txt"), "f".to_string()));
    write_file(FileSpec::new(root.join("another.txt"), "a".to_string()));
    write_file(FileSpec::new(root.join("dir").join("nested.txt"), "n".to_string()));
    create_directory(&root.join("empty"));

    let status = wit_stdout(root, &["status", "--porcelain"]);

    assert_eq!(status, "?? another.txt\n?? dir/nested.txt\n?? file.txt\n");

    Ok(())
}
