//! Input and output of a generation run.

use std::fmt;
use std::path::PathBuf;

use crate::domain::ProjectName;

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub name: ProjectName,
    /// Directory the project is created in (normally the cwd).
    pub parent_dir: PathBuf,
}

impl GenerationRequest {
    pub fn new(name: ProjectName, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            parent_dir: parent_dir.into(),
        }
    }

    /// `parent_dir / name`.
    pub fn destination(&self) -> PathBuf {
        self.parent_dir.join(self.name.as_str())
    }
}

/// Progress events emitted by [`crate::application::ScaffoldService::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// About to copy the template to `destination`.
    Copying { destination: PathBuf },
    /// About to rewrite the manifest's `name`.
    PatchingManifest { package_name: String },
    /// About to run the installer.
    Installing { command: String },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copying { destination } => write!(f, "copying to {}", destination.display()),
            Self::PatchingManifest { package_name } => {
                write!(f, "setting package name to {package_name}")
            }
            Self::Installing { command } => write!(f, "running {command}"),
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub destination: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
    pub package_name: String,
    /// Command line that was run, e.g. `npm install`; `None` when skipped.
    pub install_command: Option<String>,
    /// Command the user should run to start the server, e.g. `npm run dev`.
    pub dev_command: String,
}

/// What a run would do, computed without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub destination: PathBuf,
    pub template: String,
    pub files: usize,
    pub directories: usize,
    pub package_name: String,
    pub install_command: Option<String>,
}
