//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `backstrap-adapters` implement them.
//!
//! - `Filesystem`: existence checks, directory creation, file I/O
//! - `TemplateSource`: where the template tree comes from
//! - `PackageInstaller`: the dependency install step

pub mod output;

pub use output::{Filesystem, PackageInstaller, TemplateSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockPackageInstaller, MockTemplateSource};
