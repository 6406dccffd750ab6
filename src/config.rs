//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/confgen/confgen.toml`
//! 3. Environment variables: `CONFGEN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "confgen.toml";

/// Terminal color handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Respect NO_COLOR/CLICOLOR and tty detection
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply the mode process-wide.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminal color mode
    pub color: ColorMode,
    /// Default tracing filter, used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `config_dir` overrides the directory searched for the config file
    /// (tests point it at a temp directory); `None` uses the global
    /// location. A missing file is not an error, a malformed one is.
    pub fn load(config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let dir = config_dir.map(Path::to_path_buf).or_else(global_config_dir);

        let mut builder = Config::builder();
        if let Some(dir) = dir {
            builder = builder.add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("CONFGEN"));

        builder.build()?.try_deserialize()
    }

    /// Path of the global config file, if a home directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        global_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "confgen").map(|dirs| dirs.config_dir().to_path_buf())
}
