//! Runtime configuration.
//!
//! Values come from the environment (after `dotenv` has loaded any `.env`
//! file) and may be overridden from the command line.

use crate::processing::DEFAULT_MAX_ROWS;
use std::error::Error;
use std::str::FromStr;

pub const MAX_ROWS_ENV: &str = "SUBZERO_MAX_ROWS";
pub const FORMAT_ENV: &str = "SUBZERO_FORMAT";
pub const LOG_CONFIG_ENV: &str = "SUBZERO_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How a result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored property and subnet tables.
    #[default]
    Table,
    /// Quoted CSV of the subnet listing.
    Csv,
    /// JSON report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', expected table, csv or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cap on subnet rows materialized per calculation.
    pub max_rows: usize,
    pub format: OutputFormat,
    /// Path of the log4rs YAML file.
    pub log_config: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_rows: DEFAULT_MAX_ROWS,
            format: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(rows) = lookup(MAX_ROWS_ENV) {
            config.max_rows = rows
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {MAX_ROWS_ENV}={rows}: {e}"))?;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format
                .parse()
                .map_err(|e| format!("Invalid {FORMAT_ENV}: {e}"))?;
        }
        if let Some(path) = lookup(LOG_CONFIG_ENV) {
            config.log_config = path;
        }
        log::debug!("config = {:?}", config);
        Ok(config)
    }
}
