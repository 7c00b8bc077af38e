use crate::common::command::{
    run_zdiff_command, workspace_dir_for_diff_hunks, workspace_dir_for_scenarios,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_side_by_side_diff_with_clipped_panels(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let expected_output = "--- 1.txt\n+++ 2.txt\n@@ -1,9 +1,6 @@\n   1  fn main() {                        │    1  fn main() {\n   2      let s = String::new();         │    2      let s = String::new();\n   3      std::io::stdin().read_line(&m… │    3      std::io::stdin().read_line(&m…\n   4 -    for i in 0..1000000000 {       │\n   5 -        println!(\"{}\",  s);        │\n   6 -    }                              │\n   7                                     │    4  \n   8      println!(\"Done\");              │    5      println!(\"Done\");\n   9                                     │    6  \n\n@@ -13,7 +10,9 @@\n  13          }                          │   10          }\n  14      });                            │   11      });\n  15                                     │   12  \n  16 -    tx.join()[-.unwrap();-]        │   13 +    {+if let Err(e) = +}tx.join()…\n                                         │   14 +        eprintln!(\"Thread error: …\n                                         │   15 +    }\n  17                                     │   16  \n  18      println!(\"All threads complet… │   17      println!(\"All threads complet…\n  19  }                                  │   18  }\n\n";
    let actual_output = run_zdiff_command(
        workspace_dir.path(),
        &["--side-by-side", "--width", "40", "1.txt", "2.txt"],
    )
    .assert()
    .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_side_by_side_scenarios(
    workspace_dir_for_scenarios: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_scenarios;

    let expected_output = "--- old.txt\n+++ new.txt\n@@ -1,8 +1,7 @@\n   1  Keep this line.          │    1  Keep this line.\n   2 -status=[-old-]           │    2 +status={+new+}\n   3  Keep this line too.      │    3  Keep this line too.\n   4 -remove [-this -]marker … │    4 +remove marker now\n   5  Keep going.              │    5  Keep going.\n   6 -Line delete only: remov… │\n   7  Still here.              │    6  Still here.\n   8 -key=[[-   -]]            │    7 +key=[{+  +}]\n\n";
    let actual_output = run_zdiff_command(
        workspace_dir.path(),
        &["-y", "-W", "30", "old.txt", "new.txt"],
    )
    .assert()
    .code(1);
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn reject_panel_width_below_minimum(workspace_dir_for_scenarios: TempDir) {
    run_zdiff_command(
        workspace_dir_for_scenarios.path(),
        &["-y", "-W", "5", "old.txt", "new.txt"],
    )
    .assert()
    .code(2);
}
