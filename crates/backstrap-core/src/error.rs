//! Unified error handling for Backstrap Core.
//!
//! Every step of a generation run fails with its own variant so callers (and
//! tests) can tell a usage problem from a conflict from an operation failure.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Backstrap Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// The invocation itself is wrong (missing or invalid project name).
    #[error("{message}")]
    Usage { message: String },

    /// The destination already exists.
    #[error("Folder with this name already exists: {path}")]
    Conflict { path: PathBuf },

    /// The template could not be read, or a file could not be written.
    #[error("Template copy failed at {path}: {reason}")]
    Copy { path: PathBuf, reason: String },

    /// The copied `package.json` could not be read, parsed or written.
    #[error("Failed to update manifest {path}: {reason}")]
    ManifestPatch { path: PathBuf, reason: String },

    /// The installer could not be spawned or exited unsuccessfully.
    #[error("Dependency installation failed (`{command}`): {reason}")]
    Install {
        command: String,
        reason: String,
        /// Exit status, when the process ran at all.
        status: Option<i32>,
    },
}

impl ScaffoldError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn copy(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Copy {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ManifestPatch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Usage { .. } => vec![
                "Usage: backstrap <project-name>".into(),
                "Use letters, numbers, hyphens and underscores".into(),
                "Examples: my-api, my_backend, MyApi".into(),
            ],
            Self::Conflict { path } => vec![
                "Choose a different project name".into(),
                format!("Or remove the existing entry: rm -rf {}", path.display()),
            ],
            Self::Copy { path, .. } => vec![
                "Check that you have write permissions in the current directory".into(),
                "Check available disk space".into(),
                format!("Files copied so far were left in place: {}", path.display()),
            ],
            Self::ManifestPatch { .. } => vec![
                "The template's package.json must be a JSON object".into(),
                "If you passed --template, check its package.json".into(),
            ],
            Self::Install { command, .. } => vec![
                format!("Ensure `{command}` works on its own"),
                "Check the installer output above for details".into(),
                "Re-run the install by hand inside the project directory".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::Usage,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::Copy { .. } | Self::ManifestPatch { .. } | Self::Install { .. } => {
                ErrorCategory::Operation
            }
        }
    }
}

impl From<DomainError> for ScaffoldError {
    /// Only name validation surfaces without a path; other domain errors are
    /// mapped at the call-site where the path is known.
    fn from(err: DomainError) -> Self {
        Self::Usage {
            message: err.to_string(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad invocation; nothing was touched.
    Usage,
    /// Destination exists; nothing was touched.
    Conflict,
    /// Failure while copying, patching or installing.
    Operation,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(ScaffoldError::usage("x").category(), ErrorCategory::Usage);
        assert_eq!(
            ScaffoldError::Conflict { path: "a".into() }.category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            ScaffoldError::manifest("a", "b").category(),
            ErrorCategory::Operation
        );
    }

    #[test]
    fn conflict_suggests_other_name() {
        let err = ScaffoldError::Conflict {
            path: PathBuf::from("/tmp/MyApi"),
        };
        assert!(err.to_string().contains("already exists"));
        assert!(err.suggestions().iter().any(|s| s.contains("different")));
    }

    #[test]
    fn invalid_name_becomes_usage_error() {
        let err: ScaffoldError = DomainError::InvalidProjectName {
            name: "a/b".into(),
            reason: "name cannot contain path separators".into(),
        }
        .into();
        assert!(matches!(err, ScaffoldError::Usage { .. }));
        assert!(err.to_string().contains("a/b"));
    }

    #[test]
    fn install_error_mentions_command() {
        let err = ScaffoldError::Install {
            command: "npm install".into(),
            reason: "exited with status 1".into(),
            status: Some(1),
        };
        assert!(err.to_string().contains("npm install"));
    }
}
