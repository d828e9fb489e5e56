//! The template bundled with the binary.

use include_dir::{Dir, DirEntry, include_dir};
use tracing::trace;

use backstrap_core::{
    application::ports::TemplateSource,
    domain::{TemplateFile, TemplateTree, TreeEntry},
    error::ScaffoldResult,
};

static TEMPLATE_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/template");

/// The Express backend template shipped in `template/`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplate {
    dir: &'static Dir<'static>,
}

impl EmbeddedTemplate {
    pub fn new() -> Self {
        Self { dir: &TEMPLATE_DIR }
    }
}

impl Default for EmbeddedTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for EmbeddedTemplate {
    fn describe(&self) -> String {
        "bundled express template".to_string()
    }

    fn load(&self) -> ScaffoldResult<TemplateTree> {
        let mut tree = TemplateTree::new();
        collect(self.dir, &mut tree);
        Ok(tree)
    }
}

/// Depth-first walk; a directory is listed before its contents.
fn collect(dir: &Dir<'_>, tree: &mut TemplateTree) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => {
                trace!(path = %sub.path().display(), "embedded directory");
                tree.push(TreeEntry::Directory(sub.path().to_path_buf()));
                collect(sub, tree);
            }
            DirEntry::File(file) => {
                trace!(path = %file.path().display(), "embedded file");
                tree.push(TreeEntry::File(TemplateFile::new(file.path(), file.contents())));
            }
        }
    }
}
