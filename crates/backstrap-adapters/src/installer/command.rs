//! Runs the real package manager as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use backstrap_core::{
    application::ports::PackageInstaller,
    error::{ScaffoldError, ScaffoldResult},
};

/// Spawns `program args...` in the project directory and waits for it.
///
/// stdin, stdout and stderr are inherited so the package manager's own
/// progress output reaches the user's terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `npm install`, using `npm.cmd` on Windows.
    pub fn npm() -> Self {
        Self::new(Self::default_program(), ["install"])
    }

    pub fn default_program() -> &'static str {
        if cfg!(windows) { "npm.cmd" } else { "npm" }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn error(&self, reason: impl Into<String>, status: Option<i32>) -> ScaffoldError {
        ScaffoldError::Install {
            command: self.command_line(),
            reason: reason.into(),
            status,
        }
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::npm()
    }
}

impl PackageInstaller for CommandInstaller {
    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn dev_command(&self) -> String {
        let program = self.program.strip_suffix(".cmd").unwrap_or(&self.program);
        format!("{program} run dev")
    }

    fn is_skipped(&self) -> bool {
        false
    }

    #[instrument(skip_all, fields(command = %self.command_line(), dir = %project_dir.display()))]
    fn install(&self, project_dir: &Path) -> ScaffoldResult<()> {
        debug!("Spawning installer");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.error(format!("failed to start: {e}"), None))?;

        if status.success() {
            debug!("Installer finished");
            return Ok(());
        }

        Err(match status.code() {
            Some(code) => self.error(format!("exited with status {code}"), Some(code)),
            None => self.error("terminated by a signal", None),
        })
    }
}
