//! Infrastructure adapters for Backstrap.
//!
//! This crate implements the ports defined in `backstrap-core::application::ports`.
//! It contains all external dependencies and I/O operations, and it owns the
//! bundled `template/` directory.

pub mod filesystem;
pub mod installer;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, RecordingInstaller, SkipInstaller};
pub use template_source::{DirectoryTemplate, EmbeddedTemplate, MemoryTemplate};
