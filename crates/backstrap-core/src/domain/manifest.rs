//! The generated project's `package.json`.

use serde_json::{Map, Value};

use crate::domain::DomainError;

/// File name of the manifest, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// A parsed package manifest.
///
/// Only `name` is ever touched; every other key keeps its value and its
/// position in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn parse(contents: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(contents).map_err(|e| DomainError::ManifestParse {
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(DomainError::ManifestNotObject),
        }
    }

    /// Current `name`, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Set `name`, inserting it at the end if the template had none.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.insert("name".to_owned(), Value::String(name.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(|e| {
            DomainError::ManifestSerialize {
                reason: e.to_string(),
            }
        })?;
        out.push('\n');
        Ok(out)
    }
}
