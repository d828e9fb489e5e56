use thiserror::Error;

/// Root domain error type.
///
/// Domain errors describe rule violations on values; they carry no paths or
/// I/O detail. The application layer wraps them into a [`crate::error::ScaffoldError`]
/// of the right kind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Path escapes the project root: {path}")]
    PathOutsideRoot { path: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("manifest is not valid JSON: {reason}")]
    ManifestParse { reason: String },

    #[error("manifest must be a JSON object")]
    ManifestNotObject,

    #[error("manifest could not be serialized: {reason}")]
    ManifestSerialize { reason: String },
}

impl DomainError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate(_) | Self::DuplicatePath { .. } | Self::PathOutsideRoot { .. } => {
                ErrorCategory::Template
            }
            Self::ManifestParse { .. }
            | Self::ManifestNotObject
            | Self::ManifestSerialize { .. } => ErrorCategory::Manifest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Manifest,
}
