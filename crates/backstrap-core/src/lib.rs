//! Backstrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Backstrap
//! backend generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         backstrap-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! │   conflict check → copy → patch →       │
//! │   install                               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateSource, Installer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   backstrap-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use backstrap_core::prelude::*;
//!
//! let request = GenerationRequest::new(ProjectName::parse("MyApi")?, ".");
//! let service = ScaffoldService::new(source, filesystem, installer);
//! let report = service.generate(&request, |_stage| {})?;
//! assert_eq!(report.package_name, "myapi");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, PackageInstaller, TemplateSource},
    };
    pub use crate::domain::{
        GenerationPlan, GenerationReport, GenerationRequest, PackageManifest, ProjectName, Stage,
        TemplateFile, TemplateTree, TreeEntry,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
