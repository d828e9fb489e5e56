//! Installers that never spawn anything.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use backstrap_core::{
    application::ports::PackageInstaller,
    error::{ScaffoldError, ScaffoldResult},
};

/// Used for `--skip-install`: reports itself as skipped and does nothing.
#[derive(Debug, Clone)]
pub struct SkipInstaller {
    dev_command: String,
}

impl SkipInstaller {
    /// `dev_command` is still shown in the success banner.
    pub fn new(dev_command: impl Into<String>) -> Self {
        Self {
            dev_command: dev_command.into(),
        }
    }
}

impl PackageInstaller for SkipInstaller {
    fn command_line(&self) -> String {
        String::new()
    }

    fn dev_command(&self) -> String {
        self.dev_command.clone()
    }

    fn is_skipped(&self) -> bool {
        true
    }

    fn install(&self, _project_dir: &Path) -> ScaffoldResult<()> {
        Ok(())
    }
}

/// Records every directory it is asked to install into (testing).
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    fail_with: Option<i32>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every install fails as if the process exited with `status`.
    pub fn failing(status: i32) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn command_line(&self) -> String {
        "npm install".to_string()
    }

    fn dev_command(&self) -> String {
        "npm run dev".to_string()
    }

    fn is_skipped(&self) -> bool {
        false
    }

    fn install(&self, project_dir: &Path) -> ScaffoldResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(project_dir.to_path_buf());
        }
        match self.fail_with {
            Some(code) => Err(ScaffoldError::Install {
                command: self.command_line(),
                reason: format!("exited with status {code}"),
                status: Some(code),
            }),
            None => Ok(()),
        }
    }
}
