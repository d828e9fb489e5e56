//! A template read from a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use backstrap_core::{
    application::ports::TemplateSource,
    domain::{TemplateFile, TemplateTree, TreeEntry},
    error::{ScaffoldError, ScaffoldResult},
};

/// Template rooted at a directory.
///
/// Symlinks are followed, so the generated project gets real files. The
/// executable bit is kept on Unix.
#[derive(Debug, Clone)]
pub struct DirectoryTemplate {
    root: PathBuf,
}

impl DirectoryTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplate {
    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn load(&self) -> ScaffoldResult<TemplateTree> {
        if !self.root.is_dir() {
            return Err(ScaffoldError::copy(&self.root, "template directory not found"));
        }

        let mut tree = TemplateTree::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                ScaffoldError::copy(path, e.to_string())
            })?;

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| ScaffoldError::copy(entry.path(), e.to_string()))?
                .to_path_buf();

            if entry.file_type().is_dir() {
                tree.push(TreeEntry::Directory(relative));
                continue;
            }

            let contents = fs::read(entry.path())
                .map_err(|e| ScaffoldError::copy(entry.path(), e.to_string()))?;
            let mut file = TemplateFile::new(relative, contents);
            if is_executable(entry.path()) {
                file = file.executable();
            }
            tree.push(TreeEntry::File(file));
        }

        debug!(
            files = tree.file_count(),
            directories = tree.directory_count(),
            "Template directory read"
        );
        Ok(tree)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}
