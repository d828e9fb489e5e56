//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command, not here)
//! 2. Environment variables: `BACKSTRAP_` prefix, `__` between sections,
//!    e.g. `BACKSTRAP_INSTALL__PROGRAM=pnpm`
//! 3. The file given with `--config` (must exist)
//! 4. The user config file (`config.toml` in the platform config dir)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use backstrap_adapters::CommandInstaller;

const ENV_PREFIX: &str = "BACKSTRAP";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub template: TemplateConfig,
    /// Dependency installation.
    pub install: InstallConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template directory; the bundled template is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    pub program: String,
    pub args: Vec<String>,
    pub skip: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig { no_color: false },
            template: TemplateConfig { path: None },
            install: InstallConfig {
                program: CommandInstaller::default_program().into(),
                args: vec!["install".into()],
                skip: false,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// default location it is required to exist.
    pub fn load(config_file: Option<&PathBuf>) -> Result<Self, config::ConfigError> {
        Self::load_from(Self::config_path().as_deref(), config_file, Some(ENV_PREFIX))
    }

    fn load_from(
        default_file: Option<&Path>,
        config_file: Option<&PathBuf>,
        env_prefix: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = default_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }
        if let Some(prefix) = env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .try_parsing(true)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("install.args"),
            );
        }

        builder.build()?.try_deserialize()
    }

    /// Path to the default configuration file, if the platform has a config
    /// directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "backstrap", "backstrap")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
