use crate::common::command::{
    committed_repository_dir, head_commit_id, run_wit_command, wit_commit,
};
use crate::common::file::{FileSpec, delete_path, list_files, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_restores_earlier_commit(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    let first_id = head_commit_id(root).expect("HEAD should be set after a commit");

    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(
        root.join("c").join("4.txt"),
        "four".to_string(),
    ));
    delete_path(&root.join("a").join("b").join("3.txt"));
    run_wit_command(root, &["add", "."]).assert().success();
    wit_commit(root, "Second commit").assert().success();

    assert_eq!(list_files(root), vec![".witignore", "1.txt", "a/2.txt", "c/4.txt"]);

    run_wit_command(root, &["checkout", &first_id])
        .assert()
        .success()
        .stdout(format!("HEAD is now at {first_id}\n"));

    assert_eq!(list_files(root), vec![".witignore", "1.txt", "a/2.txt", "a/b/3.txt"]);
    assert_eq!(read_file(&root.join("1.txt")), "one");
    assert_eq!(read_file(&root.join("a").join("b").join("3.txt")), "three");
    assert!(!root.join("c").exists());
    assert_eq!(head_commit_id(root), Some(first_id));

    Ok(())
}
