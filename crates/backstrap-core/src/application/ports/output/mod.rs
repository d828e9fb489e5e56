//! Driven (output) ports - implemented by infrastructure.

use std::io;
use std::path::Path;

use crate::domain::TemplateTree;
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `backstrap_adapters::filesystem::LocalFilesystem` (production)
/// - `backstrap_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Methods return plain `io::Result`; the service decides which step a
/// failure belongs to.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` for any entry at `path`: file, directory or symlink.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write bytes to a file, replacing it if present.
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Mark a file executable (no-op where the platform has no such bit).
    fn set_executable(&self, path: &Path) -> io::Result<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Port for the template being copied.
///
/// Implemented by:
/// - `backstrap_adapters::template_source::EmbeddedTemplate` (bundled)
/// - `backstrap_adapters::template_source::DirectoryTemplate` (on disk)
/// - `backstrap_adapters::template_source::MemoryTemplate` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Short description for logs and dry runs.
    fn describe(&self) -> String;

    /// Load the full tree. Failures are `ScaffoldError::Copy`.
    fn load(&self) -> ScaffoldResult<TemplateTree>;
}

/// Port for the dependency installation step.
///
/// Implemented by:
/// - `backstrap_adapters::installer::CommandInstaller` (runs `npm install`)
/// - `backstrap_adapters::installer::SkipInstaller` (`--skip-install`)
/// - `backstrap_adapters::installer::RecordingInstaller` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// The command line as shown to the user, e.g. `npm install`.
    fn command_line(&self) -> String;

    /// The command that starts the generated server, e.g. `npm run dev`.
    fn dev_command(&self) -> String;

    /// `true` when installation is disabled and [`Self::install`] does nothing.
    fn is_skipped(&self) -> bool;

    /// Run the install in `project_dir`, blocking until it finishes.
    fn install(&self, project_dir: &Path) -> ScaffoldResult<()>;
}
