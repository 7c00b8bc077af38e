use crate::common::command::{run_zdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file, write_generated_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_no_changes_for_identical_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_spec = write_generated_file(workspace_dir.path(), 20);
    let copy_path = workspace_dir.path().join("copy.txt");
    write_file(FileSpec::new(copy_path, file_spec.content.clone()));

    let file_name = file_spec
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("generated file has no name")?;

    run_zdiff_command(workspace_dir.path(), &[file_name, "copy.txt"])
        .assert()
        .code(0)
        .stdout("    No changes detected\n");

    Ok(())
}

#[rstest]
fn report_no_changes_for_empty_files(workspace_dir: TempDir) {
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), String::new()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), String::new()));

    run_zdiff_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("    No changes detected\n");
}

#[rstest]
fn report_no_changes_in_side_by_side_mode(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("a.txt"),
        "same\n".to_string(),
    ));

    run_zdiff_command(workspace_dir.path(), &["-y", "a.txt", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes detected"));
}
