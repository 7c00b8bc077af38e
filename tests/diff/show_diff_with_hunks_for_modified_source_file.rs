use crate::common::command::{diff_hunks_output, run_zdiff_command, workspace_dir_for_diff_hunks};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_with_hunks_for_modified_source_file(
    workspace_dir_for_diff_hunks: TempDir,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let actual_output = run_zdiff_command(workspace_dir.path(), &["1.txt", "2.txt"])
        .assert()
        .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, diff_hunks_output);

    Ok(())
}

#[rstest]
fn show_diff_with_hunks_in_reverse_direction(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let actual_output = run_zdiff_command(workspace_dir.path(), &["2.txt", "1.txt"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    assert!(stdout.starts_with("--- 2.txt\n+++ 1.txt\n@@ -1,6 +1,9 @@\n"));
    assert!(stdout.contains("\n   4 +    for i in 0..1000000000 {\n"));

    Ok(())
}
