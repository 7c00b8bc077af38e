use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    write_bytes(&file_spec.path, file_spec.content.as_bytes());
}

pub fn write_bytes(path: &Path, content: &[u8]) {
    // make sure the parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

/// Write a file of random lorem lines, one sentence per line.
pub fn write_generated_file(dir: &Path, lines_count: usize) -> FileSpec {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let file_name = format!("{}.txt", Word().fake::<String>());
    let content = (0..lines_count)
        .map(|_| Words(3..8).fake::<Vec<String>>().join(" ") + "\n")
        .collect::<String>();

    let file_spec = FileSpec::new(dir.join(file_name), content);
    write_file(file_spec.clone());

    file_spec
}
