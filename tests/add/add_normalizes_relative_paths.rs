use crate::common::command::{init_repository_dir, run_wit_command};
use crate::common::file::{FileSpec, list_files, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_with_dot_stages_the_whole_working_directory(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(root.join("src").join("lib.rs"), "lib".to_string()));

    run_wit_command(root, &["add", "."])
        .assert()
        .success()
        .stdout("Added directory '.' to staging (2 files)\n");

    assert_eq!(
        list_files(&root.join(".wit").join("staging")),
        vec!["a.txt", "src/lib.rs"]
    );

    Ok(())
}

#[rstest]
fn add_normalizes_dot_and_parent_components(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("src").join("lib.rs"), "lib".to_string()));
    write_file(FileSpec::new(root.join("src").join("main.rs"), "main".to_string()));

    run_wit_command(root, &["add", "./src/../src/main.rs"])
        .assert()
        .success()
        .stdout("Added 'src/main.rs' to staging\n");

    assert_eq!(
        list_files(&root.join(".wit").join("staging")),
        vec!["src/main.rs"]
    );

    Ok(())
}
