//! The project name given on the command line.

use std::fmt;

use crate::domain::DomainError;

/// A validated project name.
///
/// The name is used twice: verbatim as the destination directory, and
/// lower-cased as the `name` field of the generated `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw name.
    ///
    /// The name must be a single path component: no separators, not `.` or
    /// `..`, no NUL bytes. Dot-prefixed names such as `.api` are allowed.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        let reason = if raw.is_empty() {
            Some("name cannot be empty")
        } else if raw.trim().is_empty() {
            Some("name cannot be blank")
        } else if raw == "." || raw == ".." {
            Some("name cannot be '.' or '..'")
        } else if raw.contains('/') || raw.contains('\\') {
            Some("name cannot contain path separators")
        } else if raw.contains('\0') {
            Some("name cannot contain NUL bytes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name: raw,
                reason: reason.into(),
            }),
            None => Ok(Self(raw)),
        }
    }

    /// The name exactly as typed; used for the destination directory.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lower-cased name written into the manifest.
    pub fn package_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
