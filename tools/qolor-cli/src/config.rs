///
/// # Configuration
///
/// Settings come from an optional `qolor.toml`. Every table and every key
/// is optional; missing values take their defaults, and command-line flags
/// override whatever the file says.
///
/// ## Example qolor.toml
///
/// ```toml
/// [csv]
/// separators = ",;"
/// quote = "\""
/// first_column = 0
///
/// [sqlite]
/// busy_timeout_ms = 500
/// readonly = true
///
/// [output]
/// format = "json"
///
/// [log]
/// level = "debug"
/// ```
///
/// ## Discovery
///
/// An explicit `--config <path>` must exist. Without it, `./qolor.toml` is
/// used when present and the defaults otherwise.
///

use std::path::{Path, PathBuf};

use qolor_csv::CsvOptions;
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

pub const CONFIG_FILE: &str = "qolor.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub csv: CsvOptions,
    pub sqlite: SqliteConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SqliteConfig {
    pub busy_timeout_ms: Option<u64>,
    pub readonly: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn parse_config(path: &Path) -> Result<Config, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<Config, CliError> {
    toml::from_str(content).map_err(|e| CliError::InvalidConfig(e.to_string()))
}

/// Loads `explicit` if given, else `qolor.toml` in `dir` if present.
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, CliError> {
    if let Some(path) = explicit {
        return parse_config(path);
    }
    let candidate: PathBuf = dir.join(CONFIG_FILE);
    if candidate.is_file() {
        parse_config(&candidate)
    } else {
        Ok(Config::default())
    }
}
