//! Domain layer: pure types and rules, no I/O.

pub mod error;
pub mod manifest;
pub mod project_name;
pub mod request;
pub mod template_tree;

pub use error::{DomainError, ErrorCategory};
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use project_name::ProjectName;
pub use request::{GenerationPlan, GenerationReport, GenerationRequest, Stage};
pub use template_tree::{TemplateFile, TemplateTree, TreeEntry};
