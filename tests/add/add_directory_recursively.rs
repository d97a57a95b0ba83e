use crate::common::command::{init_repository_dir, run_wit_command};
use crate::common::file::{FileSpec, list_files, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_directory_recursively(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let generated = write_generated_files(&root.join("docs"), 3);
    write_file(FileSpec::new(
        root.join("docs").join("drafts").join("idea.md"),
        "maybe".to_string(),
    ));
    write_file(FileSpec::new(root.join("outside.txt"), "not staged".to_string()));

    run_wit_command(root, &["add", "docs"])
        .assert()
        .success()
        .stdout("Added directory 'docs' to staging (4 files)\n");

    let mut expected = generated
        .iter()
        .map(|spec| {
            format!(
                "docs/{}",
                spec.path.file_name().unwrap_or_default().to_string_lossy()
            )
        })
        .collect::<Vec<_>>();
    expected.push("docs/drafts/idea.md".to_string());
    expected.sort();

    assert_eq!(list_files(&root.join(".wit").join("staging")), expected);

    Ok(())
}
