use crate::common::command::{run_zdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("one\ntwo\n", "one\ntwo", "    Only difference: no newline at end of new.txt\n")]
#[case("one\ntwo", "one\ntwo\n", "    Only difference: no newline at end of old.txt\n")]
fn report_trailing_newline_only_difference(
    workspace_dir: TempDir,
    #[case] old_content: &str,
    #[case] new_content: &str,
    #[case] expected_output: &str,
) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        old_content.to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        new_content.to_string(),
    ));

    run_zdiff_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .code(1)
        .stdout(expected_output.to_string());
}

#[rstest]
fn note_missing_newline_after_hunks(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "one\ntwo\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "one\nthree".to_string(),
    ));

    let expected_output = "--- old.txt\n+++ new.txt\n@@ -1,2 +1,2 @@\n   1  one\n   2 -[-two-]\n   2 +{+three+}\n\n\\ No newline at end of new.txt\n";

    run_zdiff_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .code(1)
        .stdout(expected_output);
}
