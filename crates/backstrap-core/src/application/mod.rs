//! Application layer for Backstrap.
//!
//! This layer contains:
//! - **Services**: the generation use case (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod ports;
pub mod services;

pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PackageInstaller, TemplateSource};
