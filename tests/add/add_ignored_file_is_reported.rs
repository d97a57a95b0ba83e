use crate::common::command::{init_repository_dir, run_wit_command};
use crate::common::file::{FileSpec, list_files, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_ignored_file_is_reported(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("b.txt"), "secret".to_string()));

    run_wit_command(root, &["ignore", "b.txt"]).assert().success();
    run_wit_command(root, &["add", "b.txt"])
        .assert()
        .success()
        .stdout("Ignoring 'b.txt' (matches pattern 'b.txt' in .witignore)\n");

    assert!(list_files(&root.join(".wit").join("staging")).is_empty());

    Ok(())
}

#[rstest]
fn ignored_entries_inside_a_directory_are_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("app").join("main.rs"), "main".to_string()));
    write_file(FileSpec::new(root.join("app").join("debug.log"), "log".to_string()));
    write_file(FileSpec::new(
        root.join("app").join("target").join("app.o"),
        "obj".to_string(),
    ));

    run_wit_command(root, &["ignore", "*.log"]).assert().success();
    run_wit_command(root, &["ignore", "target"]).assert().success();
    run_wit_command(root, &["add", "app"])
        .assert()
        .success()
        .stdout("Added directory 'app' to staging (1 file)\n");

    assert_eq!(
        list_files(&root.join(".wit").join("staging")),
        vec!["app/main.rs"]
    );

    Ok(())
}
