//! In-memory view of a template: what gets copied, relative to its root.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::DomainError;

/// A file inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template root.
    pub path: PathBuf,
    /// Raw bytes, copied verbatim.
    pub contents: Vec<u8>,
    /// Unix executable bit, when the source knows it.
    pub executable: bool,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// A single entry in a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    Directory(PathBuf),
    File(TemplateFile),
}

impl TreeEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) => path,
            Self::File(file) => &file.path,
        }
    }
}

/// Ordered list of entries. Directories are listed so that empty ones are
/// reproduced too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTree {
    pub entries: Vec<TreeEntry>,
}

impl TemplateTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: TreeEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn push(&mut self, entry: TreeEntry) {
        self.entries.push(entry);
    }

    pub fn files(&self) -> impl Iterator<Item = &TemplateFile> {
        self.entries.iter().filter_map(|e| match e {
            TreeEntry::File(f) => Some(f),
            TreeEntry::Directory(_) => None,
        })
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&TemplateFile> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.file(path).is_some()
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn directory_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TreeEntry::Directory(_)))
            .count()
    }

    /// Every path must be relative, stay under the root, and appear once.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidTemplate("template is empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            let escapes = path.as_os_str().is_empty()
                || path.components().any(|c| {
                    matches!(
                        c,
                        Component::ParentDir | Component::RootDir | Component::Prefix(_)
                    )
                });
            if escapes {
                return Err(DomainError::PathOutsideRoot {
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}
