use crate::areas::workspace::Workspace;
use crate::artifacts::document::Document;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// The two documents being compared and the sink their diff is written to.
pub struct Comparison {
    old: Document,
    new: Document,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(old: Document, new: Document, writer: Box<dyn std::io::Write>) -> Self {
        Comparison {
            old,
            new,
            writer: RefCell::new(writer),
        }
    }

    /// Load both files through the workspace.
    pub fn open(
        workspace: &Workspace,
        old_path: &Path,
        new_path: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let old = workspace.read_document(old_path)?;
        let new = workspace.read_document(new_path)?;

        Ok(Comparison::new(old, new, writer))
    }

    pub fn old(&self) -> &Document {
        &self.old
    }

    pub fn new_document(&self) -> &Document {
        &self.new
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
