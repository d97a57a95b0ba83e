use crate::common::command::{init_repository_dir, run_wit_command, wit_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignore_directory_pattern_hides_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("main.rs"), "fn main() {}".to_string()));
    write_file(FileSpec::new(
        root.join("target").join("debug").join("main.o"),
        "obj".to_string(),
    ));
    write_file(FileSpec::new(root.join("notes").join("todo.tmp"), "x".to_string()));
    write_file(FileSpec::new(root.join("notes").join("plan.md"), "y".to_string()));

    run_wit_command(root, &["ignore", "target"]).assert().success();
    run_wit_command(root, &["ignore", "*.tmp"]).assert().success();

    let status = wit_stdout(root, &["status", "--porcelain"]);

    assert_eq!(status, "?? main.rs\n?? notes/plan.md\n");

    Ok(())
}
