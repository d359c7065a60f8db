//! CLI-owned configuration: TOML file + `TRIPDESK_` env vars.
//!
//! Core never reads config -- it receives a resolved data directory.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// CLI-owned TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Where the data files live. Overridable with --data-dir / env.
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Default output format for list subcommands.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}

// ── Paths ────────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tripdesk", "tripdesk")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".tripdesk/config.toml"))
}

/// Default data directory when neither flag, env, nor config names one.
fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tripdesk/data"))
}

// ── Loading ──────────────────────────────────────────────────────────

/// Load the config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("TRIPDESK_CONFIG_"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Resolve the data directory: flag (or `TRIPDESK_DATA_DIR` via clap) >
/// config file > platform default.
pub fn resolve_data_dir(global: &GlobalOpts, config: &Config) -> PathBuf {
    global
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir)
}

/// Resolve the output format: flag (or `TRIPDESK_OUTPUT` via clap) >
/// config file `defaults.output` > table.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    use clap::ValueEnum;

    global.output.clone().unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or_else(|_| {
            tracing::warn!(
                value = %config.defaults.output,
                "unrecognized defaults.output in config, using table"
            );
            OutputFormat::Table
        })
    })
}
