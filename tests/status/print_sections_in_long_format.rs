use crate::common::command::{committed_repository_dir, run_wit_command, wit_stdout};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_sections_in_long_format(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = committed_repository_dir.path();
    write_file(FileSpec::new(root.join("new.txt"), "new".to_string()));
    run_wit_command(root, &["add", "new.txt"]).assert().success();
    write_file(FileSpec::new(root.join("a").join("2.txt"), "changed".to_string()));
    delete_path(&root.join("1.txt"));
    write_file(FileSpec::new(root.join("scratch.txt"), "s".to_string()));

    let status = wit_stdout(root, &["status"]);

    assert_eq!(
        status,
        "Changes to be committed:\n\
         \x20       new file:   new.txt\n\
         \n\
         Changes not staged for commit:\n\
         \x20       deleted:    1.txt\n\
         \x20       modified:   a/2.txt\n\
         \n\
         Untracked files:\n\
         \x20       scratch.txt\n"
    );

    Ok(())
}

#[rstest]
fn print_placeholders_when_clean(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = wit_stdout(committed_repository_dir.path(), &["status"]);

    assert_eq!(
        status,
        "Changes to be committed:\n\
         \x20       (no changes staged for commit)\n\
         \n\
         Changes not staged for commit:\n\
         \x20       (no changes added to commit)\n\
         \n\
         Untracked files:\n\
         \x20       (nothing untracked)\n"
    );

    Ok(())
}
