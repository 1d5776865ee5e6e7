//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! the positional sample-count argument.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pi_core::mc::validate_sample_count;
use pi_render::OutputFormat;

/// Default number of samples when none is given.
pub const DEFAULT_NUM_SAMPLES: usize = 50_000;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mc-pi.toml";

/// Environment variable names
pub mod env {
    /// Explicit configuration file path
    pub const CONFIG: &str = "MC_PI_CONFIG";
    /// Sample count
    pub const NUM_SAMPLES: &str = "MC_PI_NUM_SAMPLES";
    /// RNG seed
    pub const SEED: &str = "MC_PI_SEED";
    /// Output directory for plots
    pub const OUTPUT_DIR: &str = "MC_PI_OUTPUT_DIR";
    /// Image format (png, svg)
    pub const FORMAT: &str = "MC_PI_FORMAT";
    /// Whether to write the scatter plot
    pub const PLOT_POINTS: &str = "MC_PI_PLOT_POINTS";
    /// Log level
    pub const LOG_LEVEL: &str = "MC_PI_LOG_LEVEL";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Number of points to draw
    pub num_samples: usize,
    /// RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Directory receiving the plots
    pub output_dir: PathBuf,
    /// Image format
    pub format: OutputFormat,
    /// Whether to write the scatter plot
    pub plot_points: bool,
    /// Log level used when RUST_LOG is not set
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: None,
            output_dir: PathBuf::from("."),
            format: OutputFormat::Svg,
            plot_points: true,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env::NUM_SAMPLES) {
            self.num_samples = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: env::NUM_SAMPLES,
                reason: format!("'{}' is not a positive integer", value),
            })?;
        }

        if let Some(value) = lookup(env::SEED) {
            let seed = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: env::SEED,
                reason: format!("'{}' is not an unsigned 64-bit integer", value),
            })?;
            self.seed = Some(seed);
        }

        if let Some(value) = lookup(env::OUTPUT_DIR) {
            self.output_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup(env::FORMAT) {
            self.format = value.parse().map_err(|e: pi_render::RenderError| {
                ConfigError::InvalidValue {
                    name: env::FORMAT,
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(env::PLOT_POINTS) {
            self.plot_points = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                name: env::PLOT_POINTS,
                reason: format!("'{}' is not a boolean", value),
            })?;
        }

        if let Some(value) = lookup(env::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(num_samples) = cli.num_samples {
            self.num_samples = num_samples;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sample_count(self.num_samples).map_err(|e| ConfigError::InvalidValue {
            name: "num_samples",
            reason: e.to_string(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Sample count from the positional argument, already validated
    pub num_samples: Option<usize>,
}

/// Reads a variable from the process environment
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Positional CLI argument
/// 2. Environment variables
/// 3. Config file (`MC_PI_CONFIG`, or `mc-pi.toml` if present)
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(env::CONFIG) {
        Some(path) => AppConfig::from_file(Path::new(&path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            AppConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    config.apply_env(&lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
