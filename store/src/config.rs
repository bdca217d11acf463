//! Configuration.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use serde::Deserialize;
use xdg::BaseDirectories;

use skylog::timestamp::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

/// Application prefix in XDG base directories.
///
/// This will be concatenated into `$XDG_CONFIG_HOME/skylog`.
const XDG_PREFIX: &str = "skylog";

/// Environment variable holding a base64-encoded configuration.
const ENV_CONFIG_BASE64: &str = "SKYLOG_CONFIG_BASE64";

/// Configuration shared by the Skylog tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection.
    pub database: DatabaseConfig,

    /// Flight import.
    #[serde(default = "Default::default")]
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL.
    ///
    /// For example, `sqlite:///var/lib/skylog/skylog.db?mode=rwc`.
    pub url: String,
}

/// Columns and formats of flight CSV files.
///
/// Column names are matched ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ImportConfig {
    /// Column holding the drone name.
    #[serde(default = "default_drone_column")]
    pub drone_column: String,

    /// Column holding the location name.
    #[serde(default = "default_location_column")]
    pub location_column: String,

    /// Column holding the operator number.
    #[serde(default = "default_operator_number_column")]
    pub operator_number_column: String,

    #[serde(default = "default_start_date_column")]
    pub start_date_column: String,

    #[serde(default = "default_start_time_column")]
    pub start_time_column: String,

    #[serde(default = "default_end_date_column")]
    pub end_date_column: String,

    #[serde(default = "default_end_time_column")]
    pub end_time_column: String,

    /// `chrono` format of date cells.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// `chrono` format of time cells.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            drone_column: default_drone_column(),
            location_column: default_location_column(),
            operator_number_column: default_operator_number_column(),
            start_date_column: default_start_date_column(),
            start_time_column: default_start_time_column(),
            end_date_column: default_end_date_column(),
            end_time_column: default_end_time_column(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

fn default_drone_column() -> String {
    "Drone".to_string()
}

fn default_location_column() -> String {
    "Location".to_string()
}

fn default_operator_number_column() -> String {
    "OperatorNumber".to_string()
}

fn default_start_date_column() -> String {
    "StartDate".to_string()
}

fn default_start_time_column() -> String {
    "StartTime".to_string()
}

fn default_end_date_column() -> String {
    "EndDate".to_string()
}

fn default_end_time_column() -> String {
    "EndTime".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    tracing::info!("Using configurations: {:?}", path);

    let config = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read configuration file {:?}: {}", path, e))?;

    load_config_from_str(&config)
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    toml::from_str(s).map_err(|e| anyhow!("Invalid configuration file: {}", e))
}

/// Loads the configuration.
///
/// An explicit path wins over the environment, which wins over the
/// default path in the XDG config directory.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = config_path {
        return load_config_from_path(config_path);
    }

    if let Ok(encoded) = env::var(ENV_CONFIG_BASE64) {
        tracing::info!("Using configurations from environment variable");

        let decoded = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| anyhow!("{} is not valid base64: {}", ENV_CONFIG_BASE64, e))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|e| anyhow!("{} is not valid UTF-8: {}", ENV_CONFIG_BASE64, e))?;

        return load_config_from_str(&decoded);
    }

    let config_path = get_xdg_config_path()?;
    if !config_path.exists() {
        return Err(anyhow!(
            "No configuration file at {:?}. Pass one with -f.",
            config_path
        ));
    }

    load_config_from_path(&config_path)
}

pub fn get_xdg_config_path() -> Result<PathBuf> {
    let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
    let config_path = xdg_dirs.get_config_file("skylog.toml");

    Ok(config_path)
}
