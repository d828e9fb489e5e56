//! In-memory template for tests.

use backstrap_core::{
    application::ports::TemplateSource,
    domain::{TemplateFile, TemplateTree, TreeEntry},
    error::ScaffoldResult,
};

/// A template built in code.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplate {
    tree: TemplateTree,
}

impl MemoryTemplate {
    pub fn new(tree: TemplateTree) -> Self {
        Self { tree }
    }

    pub fn file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.tree.push(TreeEntry::File(TemplateFile::new(path, contents)));
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.tree.push(TreeEntry::Directory(path.into()));
        self
    }
}

impl TemplateSource for MemoryTemplate {
    fn describe(&self) -> String {
        format!("in-memory template ({} entries)", self.tree.entries.len())
    }

    fn load(&self) -> ScaffoldResult<TemplateTree> {
        Ok(self.tree.clone())
    }
}
