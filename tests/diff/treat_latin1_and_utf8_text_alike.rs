use crate::common::command::{run_zdiff_command, workspace_dir};
use crate::common::file::write_bytes;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn treat_latin1_and_utf8_text_alike(workspace_dir: TempDir) {
    // "café crème" in ISO-8859-1 and in UTF-8
    write_bytes(
        &workspace_dir.path().join("latin1.txt"),
        &[
            b'c', b'a', b'f', 0xE9, b' ', b'c', b'r', 0xE8, b'm', b'e', b'\n',
        ],
    );
    write_bytes(
        &workspace_dir.path().join("utf8.txt"),
        "café crème\n".as_bytes(),
    );

    run_zdiff_command(workspace_dir.path(), &["latin1.txt", "utf8.txt"])
        .assert()
        .code(0)
        .stdout("    No changes detected\n");
}

#[rstest]
fn highlight_changed_word_in_latin1_file(workspace_dir: TempDir) {
    write_bytes(
        &workspace_dir.path().join("old.txt"),
        &[b'c', b'a', b'f', 0xE9, b' ', b'n', b'o', b'i', b'r', b'\n'],
    );
    write_bytes(&workspace_dir.path().join("new.txt"), "café crème\n".as_bytes());

    run_zdiff_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .code(1)
        .stdout("--- old.txt\n+++ new.txt\n@@ -1,1 +1,1 @@\n   1 -café [-noir-]\n   1 +café {+crème+}\n\n");
}
