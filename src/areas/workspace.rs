use crate::artifacts::document::Document;
use anyhow::Context;
use std::path::Path;

/// How the bytes of a loaded file were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Directory that relative document paths are resolved against.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Load a file as a `Document` named after the path as given.
    pub fn read_document(&self, file_path: &Path) -> anyhow::Result<Document> {
        let data = self.read_file(file_path)?;
        let (text, encoding) = decode_text(data);

        if encoding == TextEncoding::Latin1 {
            log::warn!(
                "{} is not valid UTF-8, decoded as Latin-1",
                file_path.display()
            );
        }

        Ok(Document::from_text(file_path.display().to_string(), &text))
    }

    fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let full_path = self.path.join(file_path);

        if !full_path.exists() {
            anyhow::bail!("File not found: {}", file_path.display());
        }

        if !full_path.is_file() {
            anyhow::bail!("The specified path is not a file: {}", file_path.display());
        }

        std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file {}", file_path.display()))
    }
}

/// Decode as UTF-8, falling back to Latin-1 where every byte is one codepoint.
pub fn decode_text(data: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(data) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(err) => {
            let text = err.as_bytes().iter().map(|&byte| byte as char).collect();
            (text, TextEncoding::Latin1)
        }
    }
}
