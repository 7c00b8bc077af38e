#[path = "../common/mod.rs"]
mod common;

mod report_no_changes_for_identical_files;
mod report_trailing_newline_only_difference;
mod show_diff_with_hunks_for_modified_source_file;
mod show_diff_with_reduced_context;
mod show_side_by_side_diff_with_clipped_panels;
mod treat_latin1_and_utf8_text_alike;
