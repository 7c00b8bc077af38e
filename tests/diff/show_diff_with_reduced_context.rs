use crate::common::command::{
    run_zdiff_command, workspace_dir_for_diff_hunks, workspace_dir_for_scenarios,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_with_one_line_of_context(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let expected_output = "--- 1.txt\n+++ 2.txt\n@@ -3,5 +3,2 @@\n   3      std::io::stdin().read_line(&mut s).unwrap();\n   4 -    for i in 0..1000000000 {\n   5 -        println!(\"{}\",  s);\n   6 -    }\n   7  \n\n@@ -15,3 +12,5 @@\n  15  \n  16 -    tx.join()[-.unwrap();-]\n  13 +    {+if let Err(e) = +}tx.join(){+ {+}\n  14 +        eprintln!(\"Thread error: {}\", e);\n  15 +    }\n  17  \n\n";
    let actual_output = run_zdiff_command(workspace_dir.path(), &["-c", "1", "1.txt", "2.txt"])
        .assert()
        .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_every_change_in_its_own_hunk_without_context(
    workspace_dir_for_scenarios: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_scenarios;

    let expected_output = r#"--- old.txt
+++ new.txt
@@ -2,1 +2,1 @@
   2 -status=[-old-]
   2 +status={+new+}

@@ -4,1 +4,1 @@
   4 -remove [-this -]marker now
   4 +remove marker now

@@ -6,1 +5,0 @@
   6 -Line delete only: remove me.

@@ -8,1 +7,1 @@
   8 -key=[[-   -]]
   7 +key=[{+  +}]

"#;
    let actual_output =
        run_zdiff_command(workspace_dir.path(), &["--context", "0", "old.txt", "new.txt"])
            .assert()
            .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
